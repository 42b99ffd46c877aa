use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use badbank::api::AccountClient;
use badbank::config::Config;
use badbank::flows::{FlowController, FlowState};
use badbank::models::{Session, TransactionKind};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("badbank=debug".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("🏦 Starting badbank teller...");
    info!("  BADBANK - demonstration deposit/withdraw flows");
    info!("  Local balance is authoritative; remote sync is best-effort");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return;
        }
    };

    let mut session = Session::new(
        config.account_email.clone(),
        config.starting_balance,
        config.alert_timeout,
    );
    let client = AccountClient::with_base_url(config.api_base_url.clone());

    let mut deposit = FlowController::new(TransactionKind::Deposit);
    let mut withdraw = FlowController::new(TransactionKind::Withdraw);

    info!(
        "Signed in as {} with balance {:.2}, account store at {}",
        session.email(),
        session.balance(),
        config.api_base_url
    );
    info!(
        "Validation messages clear after {} ms",
        session.alert_timeout().as_millis()
    );

    print_help();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            _ => break,
        };

        // Parse command and arguments
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        let command = parts[0];
        let args = &parts[1..];

        match command {
            "deposit" | "d" => run_flow(&mut deposit, &mut session, &client, args),
            "withdraw" | "w" => run_flow(&mut withdraw, &mut session, &client, args),
            "balance" | "b" => println!("Current balance: {:.2}", session.balance()),
            "help" | "?" => print_help(),
            "quit" | "exit" => break,
            _ => println!("Unknown command: {} (try `help`)", command),
        }
    }

    info!("Goodbye");
}

/// Drive one flow through a full field-changed → submit → reset cycle.
/// A line-based surface shows each message once, so the transient status is
/// cleared right after rendering instead of on the alert timeout.
fn run_flow(flow: &mut FlowController, session: &mut Session, client: &AccountClient, args: &[&str]) {
    let raw = args.join(" ");

    flow.field_changed(session, &raw);
    if let Some(status) = flow.status() {
        println!("{}", status);
    }
    flow.clear_status();

    if !flow.submit_enabled() {
        return;
    }

    if let Some(receipt) = flow.submit(session, client) {
        println!(
            "{} of {:.2} complete. Current balance: {:.2}",
            receipt.kind, receipt.amount, receipt.new_balance
        );
    }

    for notice in flow.drain_notices() {
        println!("{}", notice);
    }

    if flow.state() == FlowState::Completed {
        flow.reset();
    }
}

fn print_help() {
    println!("Commands:");
    println!("  deposit <amount>   make a deposit ($10 minimum)");
    println!("  withdraw <amount>  make a withdraw ($5 minimum)");
    println!("  balance            show the current balance");
    println!("  help               show this help");
    println!("  quit               exit");
}
