use reqwest::Client;

use crate::error::{Error, Result};
use crate::types::Cli;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client from CLI configuration
pub fn build_http_client(cli: &Cli) -> Result<Client> {
    let mut client_builder = Client::builder().user_agent(USER_AGENT);

    if cli.skip_ssl {
        client_builder = client_builder.danger_accept_invalid_certs(true);
    }

    client_builder.build().map_err(Error::Client)
}
