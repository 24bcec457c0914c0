use clap::{Args, Parser, Subcommand};
use farmdesk::model::{FarmerDraft, FarmerStatus, StatusFilter};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "farmdesk", bin_name = "farmdesk", version = get_version())]
#[command(about = "Keep track of the farmers you work with", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Totals and the most recently active farmers (default)
    #[command(alias = "dash")]
    Dashboard,

    /// List farmers, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Match against name or email (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// all, premium or regular
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },

    /// Show every field of one farmer
    #[command(alias = "v")]
    Show {
        /// Farmer id
        id: String,
    },

    /// Add a new farmer
    #[command(alias = "n")]
    Add(AddArgs),

    /// Change an existing farmer; omitted fields keep their value
    #[command(alias = "e")]
    Edit {
        /// Farmer id
        id: String,

        #[command(flatten)]
        fields: EditArgs,
    },

    /// Delete a farmer
    #[command(alias = "rm")]
    Delete {
        /// Farmer id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (recent-count, seed-mock-data)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },

    /// Interactive session sharing one store across commands
    Shell,
}

/// Blank values are accepted here and reported together by the validator.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub aadhaar: String,

    #[arg(long, default_value = "")]
    pub address: String,

    /// premium or regular
    #[arg(long, default_value = "regular")]
    pub status: FarmerStatus,

    /// Date of birth, e.g. 1990-04-21
    #[arg(long, default_value = "")]
    pub dob: String,

    #[arg(long)]
    pub notes: Option<String>,
}

impl From<AddArgs> for FarmerDraft {
    fn from(args: AddArgs) -> Self {
        FarmerDraft {
            name: args.name,
            email: args.email,
            phone: args.phone,
            aadhaar: args.aadhaar,
            address: args.address,
            status: args.status,
            dob: args.dob,
            notes: args.notes,
        }
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct EditArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub aadhaar: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// premium or regular
    #[arg(long)]
    pub status: Option<FarmerStatus>,

    #[arg(long)]
    pub dob: Option<String>,

    #[arg(long, conflicts_with = "clear_notes")]
    pub notes: Option<String>,

    /// Remove the notes
    #[arg(long)]
    pub clear_notes: bool,
}

impl EditArgs {
    /// Overlays the given flags on a draft pre-populated from the stored record.
    pub fn apply_to(self, draft: &mut FarmerDraft) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(email) = self.email {
            draft.email = email;
        }
        if let Some(phone) = self.phone {
            draft.phone = phone;
        }
        if let Some(aadhaar) = self.aadhaar {
            draft.aadhaar = aadhaar;
        }
        if let Some(address) = self.address {
            draft.address = address;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(dob) = self.dob {
            draft.dob = dob;
        }
        if self.clear_notes {
            draft.notes = None;
        } else if let Some(notes) = self.notes {
            draft.notes = Some(notes);
        }
    }
}
