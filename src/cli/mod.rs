pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

/// Sign your documents. Vouch for your peers. Trust what you read.
#[derive(Parser, Debug)]
#[command(name = "signet", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Signet home directory (keys, trust records, config.toml)
    #[arg(long, global = true, env = "SIGNET_HOME")]
    pub home: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage local identities (key pairs)
    Identity {
        #[command(subcommand)]
        action: IdentityAction,
    },

    /// Sign a UTF-8 text file as the given user
    Sign {
        /// Local identity to sign with
        user: String,
        /// Text file to sign
        input: String,
        /// Output path (default: <input>.sdoc)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Verify a signed document against the trust store
    Verify {
        /// Signed document file
        file: String,
        /// Local identity whose trust store vouches for the author
        #[arg(long)]
        reader: String,
    },

    /// Exchange public keys with peers
    Trust {
        #[command(subcommand)]
        action: TrustAction,
    },

    /// Show operation history
    Log {
        /// Filter by the local identity that acted
        #[arg(long)]
        author: Option<String>,
        /// Show last N entries
        #[arg(long)]
        last: Option<usize>,
    },
}

#[derive(Subcommand, Debug)]
pub enum IdentityAction {
    /// Create the identity if missing, load it otherwise
    Ensure {
        /// Username, e.g. 'alice' or 'dev-laptop.2'
        username: String,
    },
    /// Delete the identity's key material
    Delete {
        username: String,
    },
    /// Export the identity's public key as a transferable file
    Export {
        username: String,
        /// Output path (default: <username>.pub)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TrustAction {
    /// Import a peer's exported key file and vouch for it locally
    Import {
        /// Exported key file (signed or unsigned)
        file: String,
        /// Local identity that vouches for the key
        #[arg(long)]
        signer: String,
    },
    /// List owners currently vouched for
    List,
}
