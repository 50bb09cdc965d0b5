use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum ClientCommands {
    /// List ServiceM8 companies.
    List {
        /// Include inactive companies
        #[arg(long)]
        all: bool,
    },
    /// List a company's jobs.
    Jobs { client_uuid: String },
}
