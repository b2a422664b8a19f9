use crate::commands::GenerateCmd;

#[derive(clap::Parser, Debug)]
#[command(
    name = "graphql-config-schema",
    version,
    about = "Generate a JSON Schema config document (plus optional Markdown \
             docs and typings) from GraphQL SDL.",
)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) generate: GenerateCmd,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
