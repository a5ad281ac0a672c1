#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Classify token arrays into numbers, alphabets and special characters over HTTP"
)]
pub struct App {
    #[clap(flatten)]
    pub serve: ServeOptions,

    #[clap(flatten)]
    pub identity: Identity,

    #[clap(flatten)]
    pub global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "BFHL_VERBOSE", global = true, default_value = "false")]
    pub verbose: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
}

/// Identity metadata echoed in every successful classification
#[derive(Debug, Clone, clap::Args)]
pub struct Identity {
    /// User id, formatted as full_name_ddmmyyyy
    #[arg(long, env = "BFHL_USER_ID", default_value = "john_doe_17091999")]
    pub user_id: String,

    /// Contact email
    #[arg(long, env = "BFHL_EMAIL", default_value = "john@xyz.com")]
    pub email: String,

    /// College roll number
    #[arg(long, env = "BFHL_ROLL_NUMBER", default_value = "ABCD123")]
    pub roll_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let app = App::try_parse_from(["bfhl"]).unwrap();
        assert_eq!(app.identity.roll_number, "ABCD123");
        assert!(!app.global.verbose);
    }

    #[test]
    fn test_flags_override_defaults() {
        let app = App::try_parse_from([
            "bfhl",
            "--port",
            "8080",
            "--user-id",
            "jane_roe_01012000",
            "--email",
            "jane@example.com",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(app.serve.port, 8080);
        assert_eq!(app.identity.user_id, "jane_roe_01012000");
        assert_eq!(app.identity.email, "jane@example.com");
        assert!(app.global.verbose);
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(App::try_parse_from(["bfhl", "--port", "not-a-port"]).is_err());
    }
}
