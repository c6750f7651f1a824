//! navdeck CLI — command-line client for a navdeck server.
//!
//! A standalone HTTP client with no internal crate dependencies — it talks
//! exclusively via the REST API, so it works against any reachable
//! instance.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

// ── ANSI color helpers ───────────────────────────────────────────────

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

// ── CLI structure ────────────────────────────────────────────────────

/// navdeck — manage your navigation board from the terminal.
#[derive(Parser)]
#[command(
    name = "navdeck",
    version,
    about = "navdeck CLI — list, add, update, delete, and reorder board cards",
    after_help = "Environment variables:\n  \
         NAVDECK_ADDR    Server address (default: http://127.0.0.1:8420)\n  \
         NAVDECK_TOKEN   Admin token for mutating commands\n\n\
         Examples:\n  \
         navdeck list\n  \
         navdeck add \"Rust docs\" https://doc.rust-lang.org --group Reading\n  \
         navdeck reorder 9c0e6f0a 7b1d2c3e"
)]
struct Cli {
    /// navdeck server address.
    #[arg(long, env = "NAVDECK_ADDR", default_value = "http://127.0.0.1:8420")]
    addr: String,

    /// Admin token (required for mutating commands).
    #[arg(long, env = "NAVDECK_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all cards in display order.
    List,
    /// List all groups.
    Groups,
    /// Add a card.
    Add {
        title: String,
        url: String,
        #[arg(long)]
        desc: Option<String>,
        /// Repeatable tag.
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        group: Option<String>,
        /// CSS color; a palette color is picked when omitted.
        #[arg(long)]
        color: Option<String>,
    },
    /// Update fields of a card by id.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        desc: Option<String>,
        #[arg(long)]
        group: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete a card by id.
    Rm { id: String },
    /// Store a new card order: ids listed first come first, cards not
    /// listed are removed.
    Reorder { ids: Vec<String> },
    /// Replace the group list.
    SetGroups { names: Vec<String> },
    /// Delete a group and every card in it.
    RmGroup { name: String },
    /// Reset the board to the example cards.
    Reset,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{RED}error:{RESET} {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let client = Client::new(&cli)?;

    match cli.command {
        Command::List => {
            let cards = client.get("/api/cards").await?;
            for card in cards.as_array().map(Vec::as_slice).unwrap_or_default() {
                print_card(card);
            }
        }
        Command::Groups => {
            let groups = client.get("/api/groups").await?;
            for group in groups.as_array().map(Vec::as_slice).unwrap_or_default() {
                println!("{}", group.as_str().unwrap_or_default());
            }
        }
        Command::Add {
            title,
            url,
            desc,
            tags,
            group,
            color,
        } => {
            let mut body = json!({"title": title, "url": url, "tags": tags});
            if let Some(desc) = desc {
                body["desc"] = json!(desc);
            }
            if let Some(group) = group {
                body["group"] = json!(group);
            }
            if let Some(color) = color {
                body["color"] = json!(color);
            }
            let created = client.send(reqwest::Method::POST, "/api/cards", body).await?;
            println!(
                "{GREEN}created{RESET} {} {DIM}{}{RESET}",
                created["title"].as_str().unwrap_or_default(),
                created["id"].as_str().unwrap_or_default()
            );
        }
        Command::Update {
            id,
            title,
            url,
            desc,
            group,
            color,
        } => {
            let mut body = json!({"id": id});
            for (key, value) in [
                ("title", title),
                ("url", url),
                ("desc", desc),
                ("group", group),
                ("color", color),
            ] {
                if let Some(value) = value {
                    body[key] = json!(value);
                }
            }
            let updated = client.send(reqwest::Method::PUT, "/api/update", body).await?;
            println!("{GREEN}updated{RESET}");
            print_card(&updated);
        }
        Command::Rm { id } => {
            client
                .send(reqwest::Method::DELETE, "/api/delete", json!({"id": id}))
                .await?;
            println!("{GREEN}deleted{RESET}");
        }
        Command::Reorder { ids } => {
            client
                .send(reqwest::Method::POST, "/api/reorder", json!({"ids": ids}))
                .await?;
            println!("{GREEN}order saved{RESET}");
        }
        Command::SetGroups { names } => {
            client
                .send(reqwest::Method::POST, "/api/groups", json!(names))
                .await?;
            println!("{GREEN}groups saved{RESET}");
        }
        Command::RmGroup { name } => {
            client
                .send(reqwest::Method::DELETE, "/api/groups", json!({"name": name}))
                .await?;
            println!("{GREEN}group deleted{RESET}");
        }
        Command::Reset => {
            client
                .send(reqwest::Method::POST, "/api/reset", Value::Null)
                .await?;
            println!("{GREEN}board reset{RESET}");
        }
    }

    Ok(())
}

fn print_card(card: &Value) {
    let title = card["title"].as_str().unwrap_or("Untitled");
    let url = card["url"].as_str().unwrap_or("#");
    let id = card["id"].as_str().unwrap_or_default();
    let group = card["group"]
        .as_str()
        .map(|g| format!(" [{g}]"))
        .unwrap_or_default();
    println!("{BOLD}{title}{RESET}{CYAN}{group}{RESET}  {url}  {DIM}{id}{RESET}");
}

/// Thin wrapper around `reqwest::Client` carrying the server address and
/// the optional admin token.
struct Client {
    http: reqwest::Client,
    addr: String,
    token: Option<String>,
}

impl Client {
    fn new(cli: &Cli) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::builder()
                .build()
                .context("failed to build HTTP client")?,
            addr: cli.addr.trim_end_matches('/').to_owned(),
            token: cli.token.clone(),
        })
    }

    async fn get(&self, path: &str) -> Result<Value> {
        let resp = self
            .http
            .get(format!("{}{path}", self.addr))
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.addr))?;
        expect_ok(resp).await
    }

    /// Send a mutating request with the admin token attached.
    async fn send(&self, method: reqwest::Method, path: &str, body: Value) -> Result<Value> {
        let token = self
            .token
            .as_deref()
            .context("admin token required: set NAVDECK_TOKEN or pass --token")?;
        let mut req = self
            .http
            .request(method, format!("{}{path}", self.addr))
            .bearer_auth(token);
        if !body.is_null() {
            req = req.json(&body);
        }
        let resp = req
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.addr))?;
        expect_ok(resp).await
    }
}

async fn expect_ok(resp: reqwest::Response) -> Result<Value> {
    let status = resp.status();
    let body: Value = resp.json().await.unwrap_or(Value::Null);
    if !status.is_success() {
        let message = body["message"].as_str().unwrap_or("no detail");
        bail!("server returned {status}: {message}");
    }
    Ok(body)
}
