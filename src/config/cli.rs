use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "https://www.supermarches.ca/pages/Aubaines.asp";

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Base URL of the discount listing
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    pub url: String,
}
