#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "concesionario", version)]
#[command(about = "Prints the dealership inventory with taxes and final prices")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let config = CliConfig::try_parse_from(["concesionario"]).unwrap();
        assert!(!config.verbose);
    }

    #[test]
    fn test_verbose_flag() {
        let config = CliConfig::try_parse_from(["concesionario", "-v"]).unwrap();
        assert!(config.verbose);
        let config = CliConfig::try_parse_from(["concesionario", "--verbose"]).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(CliConfig::try_parse_from(["concesionario", "--json"]).is_err());
    }
}
