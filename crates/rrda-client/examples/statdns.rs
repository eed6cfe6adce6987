//! Queries every supported record type for statdns.net on the public RRDA
//! instance and prints the answers.
//!
//! Run with: cargo run -p rrda-client --example statdns [base-url]
//!
//! Set `RUST_LOG=rrda_client=debug` to see each request.

use rrda_client::{Answer, RecordType, RrdaClient, DEFAULT_BASE_URL};
use tracing_subscriber::EnvFilter;

const DOMAIN: &str = "statdns.net";

/// The target for `record_type`; some types need a prefixed name.
fn target_for(record_type: RecordType) -> String {
    match record_type {
        RecordType::CNAME => format!("cname.{DOMAIN}"),
        RecordType::DNAME => format!("dname.{DOMAIN}"),
        RecordType::NSEC3 => format!("hashvalue.{DOMAIN}"),
        RecordType::PTR => "8.8.8.8.in-addr.arpa".to_string(),
        RecordType::SRV => format!("_sip._tcp.{DOMAIN}"),
        RecordType::TLSA => format!("_443._tcp.www.{DOMAIN}"),
        _ => DOMAIN.to_string(),
    }
}

fn print_answer(result: rrda_client::Result<Answer>) {
    match result {
        Ok(answer) => {
            if let Some(question) = answer.first_question() {
                println!("{}\t{}", question.name, question.record_type);
            }
            println!("{answer}");
        }
        Err(err) => println!("error: {err}"),
    }
}

#[tokio::main]
async fn main() -> rrda_client::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let base = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let client = RrdaClient::with_base_url(base)?;

    println!("starting ...");
    for record_type in RecordType::ALL {
        print_answer(client.lookup(record_type, &target_for(record_type)).await);
    }

    if let Ok(ip) = "193.0.6.139".parse() {
        print_answer(client.reverse_lookup_v4(ip).await);
    }
    if let Ok(ip) = "2001:67c:2e8:22::c100:68b".parse() {
        print_answer(client.reverse_lookup_v6(ip).await);
    }
    println!("Done");

    Ok(())
}
