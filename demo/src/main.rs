//! HealthVerse CLI
//!
//! Drives the session store and route guard from the command line. The
//! session is kept in a JSON state file between invocations, the way the web
//! app keeps it in local storage between page loads.
//!
//! Usage:
//!   cargo run -p healthverse -- register --name Ana --email ana@x.com --password secret1
//!   cargo run -p healthverse -- set-role doctor
//!   cargo run -p healthverse -- visit /patient/diet
//!   cargo run -p healthverse -- scenario

mod scenario;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use healthverse_app::{models::format_cents, App, DashboardSummary, Navigation};
use healthverse_contracts::{
    error::{HealthverseError, HealthverseResult},
    role::Role,
};
use healthverse_core::{SessionConfig, SessionStore};
use healthverse_guard::{RoleRouteGuard, RouteAccess};
use healthverse_storage::FileKeyValueStore;

// ── CLI definition ────────────────────────────────────────────────────────────

/// HealthVerse: role-based health portal, session and routing core.
#[derive(Parser)]
#[command(
    name = "healthverse",
    about = "HealthVerse session store and route guard",
    long_about = "Logs in, picks a role, and visits screens through the HealthVerse\n\
                  route guard. The session persists in a JSON state file."
)]
struct Cli {
    /// Session state file.
    #[arg(long, global = true, default_value = ".healthverse/state.json")]
    state: PathBuf,

    /// Session store configuration (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Route table to use instead of the built-in one (TOML).
    #[arg(long, global = true)]
    routes: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in with an email and password.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and log in.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the current session.
    Logout,
    /// Choose the role to act under: patient, doctor or pharmacy.
    SetRole { role: String },
    /// Show the current session.
    Whoami,
    /// Visit a path and show where the guard lets you land.
    Visit { path: String },
    /// List the route table.
    Routes,
    /// Show the dashboard figures for the current role.
    Dashboard,
    /// Walk through register, role selection, guarded visits, and logout
    /// against a throwaway in-memory store.
    Scenario,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> HealthverseResult<()> {
    let config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    };
    let guard = match &cli.routes {
        Some(path) => RoleRouteGuard::from_file(path)?,
        None => RoleRouteGuard::builtin()?,
    };

    if let Command::Scenario = cli.command {
        return scenario::run(config, guard).await;
    }
    if let Command::Routes = cli.command {
        print_routes(&guard);
        return Ok(());
    }

    let backend = Arc::new(FileKeyValueStore::new(&cli.state));
    let app = App::new(SessionStore::open(backend, config), Box::new(guard));

    match cli.command {
        Command::Login { email, password } => {
            let nav = app
                .login(&email, &password)
                .await?
                .ok_or_else(|| rejected("invalid email or password"))?;
            println!("Logged in.");
            print_navigation(&nav);
        }
        Command::Register { name, email, password } => {
            let nav = app
                .register(&name, &email, &password)
                .await?
                .ok_or_else(|| rejected("name, email and a long enough password are required"))?;
            println!("Account created.");
            print_navigation(&nav);
        }
        Command::Logout => {
            let nav = app.logout()?;
            println!("Logged out.");
            print_navigation(&nav);
        }
        Command::SetRole { role } => {
            let role: Role = role.parse()?;
            if !app.store().is_authenticated() {
                return Err(rejected("log in before choosing a role"));
            }
            let nav = app.choose_role(role)?;
            print_navigation(&nav);
        }
        Command::Whoami => match app.store().current() {
            Some(session) => {
                println!("  Name:   {}", session.name);
                println!("  Email:  {}", session.email);
                println!("  Role:   {}", session.role);
                println!("  Id:     {}", session.id.0);
            }
            None => println!("Not logged in."),
        },
        Command::Visit { path } => {
            let nav = app.visit(&path)?;
            print_navigation(&nav);
        }
        Command::Dashboard => {
            let role = app.store().current().map(|s| s.role).unwrap_or_default();
            let summary = DashboardSummary::for_role(role)
                .ok_or_else(|| rejected("log in and choose a role first"))?;
            print_dashboard(&summary);
        }
        Command::Routes | Command::Scenario => {}
    }

    Ok(())
}

fn rejected(reason: &str) -> HealthverseError {
    HealthverseError::Validation {
        reason: reason.to_string(),
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

pub(crate) fn print_navigation(nav: &Navigation) {
    println!("  Requested:  {}", nav.requested);
    for (to, reason) in &nav.redirects {
        println!("  Redirect:   → {} ({:?})", to.path(), reason);
    }
    println!("  Screen:     {} ({:?})", nav.screen.path(), nav.screen);
    if let Some(bar) = &nav.nav {
        let items: Vec<String> = bar
            .items
            .iter()
            .map(|item| {
                if item.active {
                    format!("[{}]", item.label)
                } else {
                    item.label.clone()
                }
            })
            .collect();
        println!("  Nav ({}):  {}", bar.role, items.join(" | "));
    }
}

fn print_routes(guard: &RoleRouteGuard) {
    println!("{:<28} {:<14} {:<10} NAV", "PATH", "ACCESS", "ROLE");
    for route in &guard.table().routes {
        let access = match route.access {
            RouteAccess::Public => "public",
            RouteAccess::Authenticated => "authenticated",
            RouteAccess::Protected => "protected",
        };
        let role = route
            .required_role
            .and_then(|r| r.as_str())
            .unwrap_or("-");
        println!(
            "{:<28} {:<14} {:<10} {}",
            route.path,
            access,
            role,
            route.nav_label.as_deref().unwrap_or("")
        );
    }
}

fn print_dashboard(summary: &DashboardSummary) {
    match summary {
        DashboardSummary::Patient {
            calories_today,
            medications,
            upcoming_appointments,
        } => {
            println!("  Calories today:         {}", calories_today);
            println!("  Medications:            {}", medications);
            println!("  Upcoming appointments:  {}", upcoming_appointments);
        }
        DashboardSummary::Doctor {
            pending_appointments,
            confirmed_appointments,
            weekly_slots,
        } => {
            println!("  Pending appointments:   {}", pending_appointments);
            println!("  Confirmed appointments: {}", confirmed_appointments);
            println!("  Open slots this week:   {}", weekly_slots);
        }
        DashboardSummary::Pharmacy(stats) => {
            println!("  Total revenue:          {}", format_cents(stats.total_revenue_cents));
            println!("  Pending orders:         {}", stats.pending_orders);
            println!("  Low stock items:        {}", stats.low_stock_items);
            println!("  Total products:         {}", stats.total_products);
        }
    }
}
