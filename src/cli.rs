use std::path::PathBuf;

use clap::Parser;

/// Pull acquisition records for a domain from SecurityTrails and/or mine
/// acquisition mentions for a company from Crunchbase, then save the
/// combined results as a JSON report.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Domain name to pull acquisition data for
    #[arg(long)]
    pub domain: Option<String>,

    /// Email address for the SecurityTrails login
    #[arg(long)]
    pub email: Option<String>,

    /// Password for the SecurityTrails login
    #[arg(long)]
    pub password: Option<String>,

    /// Company name to query Crunchbase for
    #[arg(long)]
    pub company_name: Option<String>,

    /// Output JSON file to save results, relative to the executable's directory
    #[arg(long)]
    pub output: PathBuf,
}

impl Cli {
    /// The SecurityTrails query only runs with a complete credential set.
    pub fn securitytrails_request(&self) -> Option<(&str, &str, &str)> {
        match (&self.domain, &self.email, &self.password) {
            (Some(domain), Some(email), Some(password)) => {
                Some((domain.as_str(), email.as_str(), password.as_str()))
            }
            _ => None,
        }
    }

    pub fn has_partial_securitytrails_request(&self) -> bool {
        self.securitytrails_request().is_none()
            && (self.domain.is_some() || self.email.is_some() || self.password.is_some())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn full_credential_set_activates_securitytrails() {
        let args = Cli::parse_from([
            "magpie",
            "--domain",
            "example.com",
            "--email",
            "user@example.com",
            "--password",
            "hunter2",
            "--output",
            "results.json",
        ]);

        assert_eq!(
            args.securitytrails_request(),
            Some(("example.com", "user@example.com", "hunter2"))
        );
        assert!(!args.has_partial_securitytrails_request());
    }

    #[test]
    fn partial_credential_set_does_not_activate_securitytrails() {
        let args = Cli::parse_from([
            "magpie",
            "--domain",
            "example.com",
            "--output",
            "results.json",
        ]);

        assert_eq!(args.securitytrails_request(), None);
        assert!(args.has_partial_securitytrails_request());
    }

    #[test]
    fn output_flag_is_required() {
        let result = Cli::try_parse_from(["magpie", "--company-name", "acme"]);

        assert!(result.is_err());
    }
}
