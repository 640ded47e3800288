pub mod toml_config;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ad-dispatch")]
#[command(about = "A small interactive tool for dispatching demo advertisements")]
pub struct CliConfig {
    #[arg(long, help = "Source key (banco, json, xml, texto); skips the source menu")]
    pub source: Option<String>,

    #[arg(
        long,
        help = "Destination key (whatsapp, sms, facebook); skips the destination menu"
    )]
    pub destination: Option<String>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Skip the interactive edit step")]
    pub no_edit: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
