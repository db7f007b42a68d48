use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use medicaid_planner::config::AppConfig;
use medicaid_planner::error::AppError;
use medicaid_planner::planning::{
    PlanningEngine, PlanningReport, ProtectionEstimate, QuizSubmission,
};
use medicaid_planner::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
    engine: Arc<PlanningEngine>,
}

#[derive(Parser, Debug)]
#[command(
    name = "Medicaid Planning Estimator",
    about = "Run the Medicaid asset-protection planning engine from the command line or as a service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess a saved quiz submission and print the planning report
    Assess(AssessArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Path to a JSON quiz submission
    #[arg(long)]
    input: PathBuf,
    /// Include the professional protection breakdown
    #[arg(long)]
    professional: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssessRequest {
    #[serde(flatten)]
    submission: QuizSubmission,
    #[serde(default)]
    include_professional: bool,
}

#[derive(Debug, Serialize)]
struct AssessResponse {
    generated_on: NaiveDate,
    #[serde(flatten)]
    report: PlanningReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    professional_estimate: Option<ProtectionEstimate>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Assess(args) => run_assess(args),
    }
}

fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/planning/assess", post(assess_endpoint))
        .with_state(state)
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
        engine: Arc::new(PlanningEngine::standard()),
    };

    let app = app_router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "medicaid planning estimator ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        input,
        professional,
    } = args;

    let raw = std::fs::read_to_string(input)?;
    let submission: QuizSubmission = serde_json::from_str(&raw)?;

    let engine = PlanningEngine::standard();
    let report = engine.assess(&submission);
    let professional_estimate =
        professional.then(|| engine.professional_estimate(&submission));

    render_planning_report(&report, professional_estimate.as_ref());

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn assess_endpoint(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AssessResponse>, AppError> {
    let AssessRequest {
        submission,
        include_professional,
    } = serde_json::from_slice(&body)?;

    let report = state.engine.assess(&submission);
    let professional_estimate =
        include_professional.then(|| state.engine.professional_estimate(&submission));

    Ok(Json(AssessResponse {
        generated_on: Local::now().date_naive(),
        report,
        professional_estimate,
    }))
}

fn render_planning_report(report: &PlanningReport, professional: Option<&ProtectionEstimate>) {
    println!("Medicaid planning estimate ({})", report.state_rules.state);
    println!(
        "Generated {} | look-back period {} months",
        Local::now().date_naive(),
        report.state_rules.look_back_period_months
    );

    println!("\nAssets");
    println!("- Total assets: ${:.0}", report.total_assets);
    println!("- Countable assets: ${:.0}", report.countable_assets);
    println!("- Spend-down required: ${:.0}", report.spend_down_amount);

    println!("\nProtection range (simplified estimate)");
    println!(
        "- ${:.0} to ${:.0} ({}% - {}%)",
        report.min_protection, report.max_protection, report.min_percentage, report.max_percentage
    );

    println!("\nEligibility");
    println!(
        "- Urgency: {}",
        report.eligibility.planning_urgency_guidance
    );
    println!(
        "- Estimated monthly copay: ${:.0}",
        report.eligibility.estimated_monthly_copay
    );
    println!(
        "- Review recommended in {} year(s)",
        report.eligibility.years_to_review
    );
    if report.miller_trust_required {
        println!("- A Miller Trust (qualified income trust) is required in this state");
    }
    println!("- {}", report.eligibility.recommended_approach);

    println!("\nPlanning approach");
    println!("- {}", report.planning_approach);

    println!("\nPlanning timeline");
    for step in &report.planning_timeline {
        println!("- {step}");
    }

    if let Some(estimate) = professional {
        println!("\nProfessional protection breakdown");
        let plan = estimate.detailed_protection_plan;
        println!("- Half-a-loaf protection: ${:.0}", plan.half_loaf_protection);
        println!(
            "- Annuity protection: ${:.0} to ${:.0}",
            plan.min_annuity_protection, plan.max_annuity_protection
        );
        println!(
            "- Combined: ${:.0} to ${:.0} ({}% - {}%)",
            estimate.min_protection,
            estimate.max_protection,
            estimate.min_percentage,
            estimate.max_percentage
        );
    }

    println!("\nState constants applied");
    println!(
        "- Resource limits: single ${:.0}, married ${:.0}, couple ${:.0}",
        report.state_rules.resource_limit_single,
        report.state_rules.resource_limit_married,
        report.state_rules.resource_limit_couple_sharing
    );
    println!(
        "- Home equity limit: ${:.0} | penalty divisor: ${:.0} | avg nursing home: ${:.0}/mo",
        report.state_rules.home_equity_limit,
        report.state_rules.penalty_divisor,
        report.state_rules.average_nursing_home_cost
    );
}
