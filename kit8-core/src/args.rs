//! core command line arguments
use clap::Parser;

/// cmd line args
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// set release environment
    #[arg(
        short,
        long,
        help = "Set release environment (dev, prod)",
        default_value = "dev"
    )]
    pub release_env: String,
    /// Application port
    #[arg(long, help = "Set app port", default_value = "3000")]
    pub port: u16,
    /// CRM port
    #[arg(long, help = "Set standalone crm port", default_value = "3001")]
    pub crm_port: u16,
    /// Inventory port
    #[arg(long, help = "Set standalone inventory port", default_value = "3002")]
    pub inventory_port: u16,
    /// Orders port
    #[arg(long, help = "Set standalone orders port", default_value = "3003")]
    pub orders_port: u16,
    /// Cashier port
    #[arg(long, help = "Set standalone cashier port", default_value = "3004")]
    pub cashier_port: u16,
    /// Token expiration in minutes
    #[arg(
        short,
        long,
        help = "Set the token expiration limit in minutes.",
        default_value = "60"
    )]
    pub token_timeout: i64,
    /// Record store backing the controllers
    #[arg(
        long,
        help = "Record store (fixture, memory)",
        default_value = "fixture"
    )]
    pub store: String,
    /// Print a bearer token for a customer and exit
    #[arg(long, help = "Issue a bearer token for the given customer id and exit")]
    pub issue_token: Option<i64>,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            release_env: String::from("dev"),
            port: crate::DEFAULT_APP_PORT,
            crm_port: 3001,
            inventory_port: 3002,
            orders_port: 3003,
            cashier_port: 3004,
            token_timeout: 60,
            store: String::from("fixture"),
            issue_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_test() {
        let args = Args::parse_from(["kit8"]);
        assert_eq!(args.release_env, "dev");
        assert_eq!(args.port, 3000);
        assert_eq!(args.token_timeout, 60);
        assert_eq!(args.store, "fixture");
        assert_eq!(args.issue_token, None);
    }

    #[test]
    fn overrides_test() {
        let args = Args::parse_from([
            "kit8",
            "-r",
            "prod",
            "--store",
            "memory",
            "--issue-token",
            "42",
            "--orders-port",
            "4003",
        ]);
        assert_eq!(args.release_env, "prod");
        assert_eq!(args.store, "memory");
        assert_eq!(args.issue_token, Some(42));
        assert_eq!(args.orders_port, 4003);
    }
}
