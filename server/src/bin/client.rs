//! Interactive terminal client for the reservation server.
//!
//! Thin plumbing only: prompts for operation arguments on stdin, issues the
//! matching HTTP request, and prints the response. No business rules live
//! here.

use anyhow::{Context, Result};
use serde_json::json;
use std::io::{self, BufRead, Write};
use trainbook_server::api::TicketPayload;

/// Server base URL; override with `TRAINBOOK_URL`.
fn base_url() -> String {
    std::env::var("TRAINBOOK_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let client = reqwest::Client::new();
    let base = base_url();
    println!("Connected to {base}");

    loop {
        println!();
        println!("Select an option:");
        println!("1. Purchase Ticket");
        println!("2. Get Receipt");
        println!("3. Get Users in section");
        println!("4. Cancel Ticket");
        println!("5. Modify Ticket");
        println!("q. Quit");

        let choice = prompt("Enter your choice: ")?;
        let outcome = match choice.as_str() {
            "1" => purchase_ticket(&client, &base).await,
            "2" => get_receipt(&client, &base).await,
            "3" => users_in_section(&client, &base).await,
            "4" => cancel_ticket(&client, &base).await,
            "5" => modify_ticket(&client, &base).await,
            "q" => {
                println!("Exiting...");
                return Ok(());
            }
            _ => {
                println!("Invalid choice. Please select a valid option.");
                Ok(())
            }
        };

        if let Err(err) = outcome {
            println!("Request failed: {err}");
        }
    }
}

/// Prints a label and reads one trimmed line from stdin.
fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read stdin")?;
    Ok(line.trim().to_string())
}

fn print_ticket(ticket: &TicketPayload) {
    println!(
        "{} {} <{}> | {} -> {} | section {} | {} cents",
        ticket.owner.first_name,
        ticket.owner.last_name,
        ticket.owner.email,
        ticket.origin,
        ticket.destination,
        ticket.section,
        ticket.price_cents,
    );
}

/// Prints either the ticket in the response or the server's error message.
async fn print_response(response: reqwest::Response) -> Result<()> {
    if response.status().is_success() {
        let ticket: TicketPayload = response.json().await?;
        print_ticket(&ticket);
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        println!("Error ({status}): {body}");
    }
    Ok(())
}

async fn purchase_ticket(client: &reqwest::Client, base: &str) -> Result<()> {
    let origin = prompt("Enter origin: ")?;
    let destination = prompt("Enter destination: ")?;
    let first_name = prompt("Enter first name: ")?;
    let last_name = prompt("Enter last name: ")?;
    let email = prompt("Enter email: ")?;
    let price_cents: u64 = prompt("Enter price in cents: ")?
        .parse()
        .context("price must be a whole number of cents")?;
    let section = prompt("Enter section: ")?;

    let response = client
        .post(format!("{base}/api/tickets"))
        .json(&json!({
            "origin": origin,
            "destination": destination,
            "owner": {
                "first_name": first_name,
                "last_name": last_name,
                "email": email,
            },
            "price_cents": price_cents,
            "section": section,
        }))
        .send()
        .await?;
    print_response(response).await
}

async fn get_receipt(client: &reqwest::Client, base: &str) -> Result<()> {
    let email = prompt("Enter email: ")?;
    let response = client
        .get(format!("{base}/api/tickets/{email}"))
        .send()
        .await?;
    print_response(response).await
}

async fn users_in_section(client: &reqwest::Client, base: &str) -> Result<()> {
    let section = prompt("Enter section: ")?;
    let response = client
        .get(format!("{base}/api/sections/{section}/tickets"))
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        println!("Error ({status}): {body}");
        return Ok(());
    }

    // One JSON ticket per line.
    let body = response.text().await?;
    let mut count = 0_u32;
    for line in body.lines().filter(|l| !l.is_empty()) {
        let ticket: TicketPayload =
            serde_json::from_str(line).context("malformed ticket in stream")?;
        print_ticket(&ticket);
        count += 1;
    }
    if count == 0 {
        println!("No bookings found in this section");
    }
    Ok(())
}

async fn cancel_ticket(client: &reqwest::Client, base: &str) -> Result<()> {
    let email = prompt("Enter email: ")?;
    let response = client
        .delete(format!("{base}/api/tickets/{email}"))
        .send()
        .await?;
    print_response(response).await
}

async fn modify_ticket(client: &reqwest::Client, base: &str) -> Result<()> {
    let email = prompt("Enter email: ")?;
    let section = prompt("Enter new section: ")?;
    let response = client
        .put(format!("{base}/api/tickets/{email}/section"))
        .json(&json!({ "section": section }))
        .send()
        .await?;
    print_response(response).await
}
