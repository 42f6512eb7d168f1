//! uanode - OPC UA node identity tool
//!
//! Parse, resolve and convert node ids from the command line.

use anyhow::Result;

fn main() -> Result<()> {
    uanode_cli::run()
}
