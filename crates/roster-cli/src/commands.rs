use roster_core::RecordFields;

use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all records
    List,

    /// Show one record
    Get {
        /// Record ID
        id: String,
    },

    /// Create a record (the store assigns the ID)
    Create {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Overwrite the fields of a record
    Update {
        /// Record ID
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a record
    Delete {
        /// Record ID
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct FieldArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long)]
    pub email: Option<String>,
}

/// Typed input is trimmed so what is validated is what gets stored.
impl From<&FieldArgs> for RecordFields {
    fn from(args: &FieldArgs) -> Self {
        RecordFields {
            name: args.name.trim().to_string(),
            age: args.age,
            email: args.email.as_deref().map(|e| e.trim().to_string()),
        }
    }
}
