//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::TraversalOrder;

/// Walk abstract syntax trees in pre-, post- and level-order
#[derive(Parser, Debug)]
#[command(name = "astwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Raise log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print node labels in traversal order
    Walk {
        /// Tree document (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Traversal order (default from config)
        #[arg(short, long, value_enum)]
        order: Option<OrderArg>,
        /// Indent labels by depth
        #[arg(short, long)]
        indent: bool,
    },

    /// Print the parent of every non-root node
    Parents {
        /// Tree document (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Draw the tree
    Tree {
        /// Tree document (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show {
        /// Also read `.astwalk.toml` from this directory
        #[arg(long, value_hint = ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },

    /// Show config paths
    Path,
}

/// Traversal order as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    Pre,
    Post,
    Level,
}

impl From<OrderArg> for TraversalOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Pre => TraversalOrder::Pre,
            OrderArg::Post => TraversalOrder::Post,
            OrderArg::Level => TraversalOrder::Level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_walk_with_order_when_parsed_then_order_set() {
        let cli = Cli::try_parse_from(["astwalk", "-dd", "walk", "tree.toml", "--order", "level", "--indent"]).unwrap();
        assert_eq!(cli.debug, 2);
        match cli.command {
            Some(Commands::Walk { file, order, indent }) => {
                assert_eq!(file, PathBuf::from("tree.toml"));
                assert_eq!(order.map(TraversalOrder::from), Some(TraversalOrder::Level));
                assert!(indent);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn given_unknown_order_when_parsed_then_rejected() {
        assert!(Cli::try_parse_from(["astwalk", "walk", "tree.toml", "--order", "inorder"]).is_err());
    }
}
