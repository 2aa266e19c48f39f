use crate::cli::ToolsArgs;
use crate::infra::{parse_wire, InMemoryNotificationSink};
use chrono::Utc;
use clap::{Args, ValueEnum};
use galaxy_toolkit::catalog::UpdateRecord;
use galaxy_toolkit::directory::{search_tools, CategoryFilter, DirectoryQuery, Route};
use galaxy_toolkit::error::AppError;
use galaxy_toolkit::notifications::Notification;
use galaxy_toolkit::session::{Completion, SessionState, Workspace};
use galaxy_toolkit::tools::battery::{
    BatteryForm, BatteryHealthResult, ChargingHabit, HeatExposure, UsagePattern,
};
use galaxy_toolkit::tools::comparison::{ComparisonForm, ComparisonResult, Winner};
use galaxy_toolkit::tools::customization::{
    CustomizationConfig, CustomizationFeature, CustomizationForm, CustomizationStyle, OneUiVersion,
};
use galaxy_toolkit::tools::firmware::{FirmwareCompatibility, FirmwareForm};
use galaxy_toolkit::tools::trade_in::{DeviceCondition, StorageTier, TradeInEstimate, TradeInForm};
use galaxy_toolkit::tools::updates::{write_csv, TypeFilter, UpdateFeed, UpdateListing, UpdateQuery};
use galaxy_toolkit::tools::upgrade::{Budget, Priority, Timeframe, UpgradeAdvice, UpgradeForm};
use galaxy_toolkit::tools::{
    Issued, SimulatedLatency, ToolError, ToolKind, ToolOutcome, ToolRequest, ToolService,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Apply the per-tool simulated latency while running the demo.
    #[arg(long)]
    pub(crate) simulate_latency: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct UpdatesArgs {
    /// Case-insensitive text matched against model, version and description
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Exact model name, e.g. "Galaxy S24"
    #[arg(long)]
    pub(crate) model: Option<String>,
    /// all, major, security or feature
    #[arg(long = "type", value_parser = parse_wire::<TypeFilter>, default_value = "all")]
    pub(crate) update_type: TypeFilter,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

/// Run one tool outside any session and print the result.
pub(crate) async fn run_tool(request: ToolRequest) -> Result<(), AppError> {
    let notifications = Arc::new(InMemoryNotificationSink::default());
    let service = ToolService::new(notifications.clone(), SimulatedLatency::Disabled);

    let result = service.submit(request).await;
    render_notifications(&notifications.drain());
    let issued = result?;
    render_outcome(&issued);
    Ok(())
}

pub(crate) fn run_updates(args: UpdatesArgs) -> Result<(), AppError> {
    let feed = UpdateFeed::standard();
    let query = UpdateQuery {
        search: args.search,
        model: args.model,
        update_type: args.update_type,
    }
    .normalize();
    let listing = feed.filter(&query);

    match args.format {
        OutputFormat::Csv => write_csv(std::io::stdout().lock(), &listing.updates)?,
        OutputFormat::Text => render_update_listing(&listing),
    }
    Ok(())
}

pub(crate) fn run_tools_listing(args: ToolsArgs) {
    let cards = search_tools(&DirectoryQuery {
        search: args.search,
        category: args.category,
    });
    if cards.is_empty() {
        println!("No tools match the current filters");
        return;
    }
    println!("Available tools");
    for card in cards {
        println!(
            "- {} [{}] {}",
            card.title,
            card.category.label(),
            card.path
        );
        println!("  {}", card.description);
    }
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let notifications = Arc::new(InMemoryNotificationSink::default());
    let service = ToolService::new(
        notifications.clone(),
        SimulatedLatency::from_enabled(args.simulate_latency),
    );
    let mut workspace = Workspace::default();

    println!("Galaxy Toolkit demo");
    run_tools_listing(ToolsArgs {
        search: None,
        category: CategoryFilter::All,
    });

    for request in sample_requests() {
        let route = Route::Tool(request.kind());
        println!("\n== {} ({})", request.kind().label(), route.path());
        let Some(session) = workspace.navigate(route) else {
            continue;
        };

        match session.run(&service, request).await {
            Ok(Completion::Applied) => {}
            Ok(Completion::Stale) => println!("  Result superseded by a newer request"),
            Err(err) => println!("  Form rejected: {}", err),
        }
        match session.state() {
            SessionState::Succeeded(issued) => render_outcome(issued),
            SessionState::Failed { message } => println!("  {}", message),
            SessionState::Rejected(err) => println!("  {}", err),
            other => println!("  Session state: {}", other.name()),
        }
        render_notifications(&notifications.drain());
    }

    println!("\n== Form validation");
    if let Some(session) = workspace.navigate(Route::Tool(ToolKind::PhoneComparison)) {
        let duplicate = ToolRequest::PhoneComparison(ComparisonForm {
            model1: Some("Galaxy S23".to_string()),
            model2: Some("Galaxy S23".to_string()),
        });
        if let Err(err) = session.run(&service, duplicate).await {
            println!("  Rejected before scoring: {}", err);
        }
    }

    println!("\n== Stale completions");
    if let Some(session) = workspace.navigate(Route::Tool(ToolKind::TradeIn)) {
        let slow = session
            .begin(sample_trade_in(DeviceCondition::Poor))
            .map_err(ToolError::from)?;
        let fast = session
            .begin(sample_trade_in(DeviceCondition::Excellent))
            .map_err(ToolError::from)?;
        let fast_result = service.compute(fast.token, fast.request).await;
        let slow_result = service.compute(slow.token, slow.request).await;
        println!(
            "  Request {} -> {:?}",
            fast.token.0,
            session.complete(fast.token, fast_result)
        );
        println!(
            "  Request {} -> {:?}",
            slow.token.0,
            session.complete(slow.token, slow_result)
        );
        if let Some(issued) = session.state().result() {
            println!("  Displayed result comes from request {}", issued.id.0);
        }
    }
    notifications.drain();

    println!("\n== Update reminder");
    if let Some(update) = service.updates().all().first() {
        let update = service.check_update(update.id)?;
        println!("  {} {} ({})", update.model, update.version, update.status.as_str());
    }
    render_notifications(&notifications.drain());

    workspace.navigate(Route::Home);
    Ok(())
}

fn sample_trade_in(condition: DeviceCondition) -> ToolRequest {
    ToolRequest::TradeIn(TradeInForm {
        model: Some("Galaxy S24".to_string()),
        condition: Some(condition),
        storage: Some(StorageTier::Gb256),
    })
}

fn sample_requests() -> Vec<ToolRequest> {
    vec![
        sample_trade_in(DeviceCondition::Good),
        ToolRequest::BatteryHealth(BatteryForm {
            model: Some("Galaxy S23".to_string()),
            phone_age: Some(18),
            usage_pattern: Some(UsagePattern::Heavy),
            charging_habits: Some(ChargingHabit::Overnight),
            heat_exposure: Some(HeatExposure::Moderate),
        }),
        ToolRequest::PhoneComparison(ComparisonForm {
            model1: Some("Galaxy S24 Ultra".to_string()),
            model2: Some("Galaxy S23 Ultra".to_string()),
        }),
        ToolRequest::UpgradeAdvisor(UpgradeForm {
            current_model: Some("Galaxy S23".to_string()),
            priorities: vec![Priority::Camera, Priority::Battery],
            budget: Some(Budget::From800To1200),
            timeframe: Some(Timeframe::Immediate),
        }),
        ToolRequest::FirmwareChecker(FirmwareForm {
            model: Some("Galaxy S24".to_string()),
            csc: Some("tmb".to_string()),
            current_firmware: None,
        }),
        ToolRequest::CustomizationGenerator(CustomizationForm {
            model: Some("Galaxy Z Flip 5".to_string()),
            one_ui_version: Some(OneUiVersion::V6_0),
            features: vec![
                CustomizationFeature::GoodLock,
                CustomizationFeature::Themes,
                CustomizationFeature::EdgePanels,
            ],
            style: Some(CustomizationStyle::Productivity),
        }),
        ToolRequest::UpdateTracker(UpdateQuery {
            search: Some("one ui".to_string()),
            ..UpdateQuery::default()
        }),
    ]
}

fn render_notifications(notifications: &[Notification]) {
    for notification in notifications {
        println!(
            "  [{}] {}",
            notification.kind.as_str(),
            notification.message
        );
    }
}

pub(crate) fn render_outcome(issued: &Issued<ToolOutcome>) {
    println!(
        "Result #{} at {}",
        issued.id.0,
        issued.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    match &issued.result {
        ToolOutcome::TradeIn(estimate) => render_trade_in(estimate),
        ToolOutcome::BatteryHealth(result) => render_battery(result),
        ToolOutcome::PhoneComparison(result) => render_comparison(result),
        ToolOutcome::UpgradeAdvisor(advice) => render_upgrade(advice),
        ToolOutcome::FirmwareChecker(result) => render_firmware(result),
        ToolOutcome::CustomizationGenerator(config) => render_customization(config),
        ToolOutcome::UpdateTracker(listing) => render_update_listing(listing),
    }
}

fn render_list(title: &str, items: &[&str]) {
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
}

fn render_trade_in(estimate: &TradeInEstimate) {
    println!(
        "- {} ({}, {}): ${} (base ${})",
        estimate.model,
        estimate.condition.label(),
        estimate.storage.label(),
        estimate.estimated_value,
        estimate.base_value
    );
    render_list("Tips", &estimate.tips);
}

fn render_battery(result: &BatteryHealthResult) {
    println!(
        "- {} after {} months: {}% ({})",
        result.model,
        result.phone_age,
        result.health_score,
        result.status.label()
    );
    println!(
        "  Usage: {} | Charging: {} | Heat: {}",
        result.usage_pattern.label(),
        result.charging_habits.label(),
        result.heat_exposure.label()
    );
    render_list("Recommendations", &result.recommendations);
}

fn render_comparison(result: &ComparisonResult) {
    println!("- {} vs {}", result.model1.name, result.model2.name);
    for category in &result.categories {
        let marker = match category.winner {
            Winner::Model1 => result.model1.name,
            Winner::Model2 => result.model2.name,
            Winner::Tie => "tie",
        };
        println!(
            "  {:<12} {} | {} -> {}",
            category.name, category.model1_value, category.model2_value, marker
        );
    }
    println!("  {}", result.summary.winner);
    println!("  {}", result.summary.recommendation);
}

fn render_upgrade(advice: &UpgradeAdvice) {
    println!(
        "- From {} | priorities {} | budget {} | {}",
        advice.current_model,
        advice.priorities.join(", "),
        advice.budget,
        advice.timeframe
    );
    let top = &advice.top_recommendation;
    println!(
        "  Top pick: {} {} (score {}) - {}",
        top.model, top.price, top.score, top.reason
    );
    for alternative in &advice.alternatives {
        println!(
            "  Alternative: {} {} (score {})",
            alternative.model, alternative.price, alternative.score
        );
    }
    render_list("Tips", &advice.tips);
}

fn render_firmware(result: &FirmwareCompatibility) {
    println!(
        "- {} [{}] {}: latest {} (Android {}, One UI {})",
        result.model,
        result.csc,
        result.region,
        result.latest_firmware,
        result.android_version,
        result.one_ui_version
    );
    println!(
        "  Risk {}: {} | bootloader {}",
        result.risk_level.label(),
        result.risk_description,
        if result.bootloader_locked { "locked" } else { "unlocked" }
    );
    render_list("Warnings", &result.warnings);
}

fn render_customization(config: &CustomizationConfig) {
    println!(
        "- {} on One UI {} | {} style | {}",
        config.model,
        config.one_ui_version.as_str(),
        config.style,
        config.features.join(", ")
    );
    if !config.good_lock_modules.is_empty() {
        println!("Good Lock modules:");
        for module in &config.good_lock_modules {
            println!("  - {}: {}", module.name, module.description);
        }
    }
    render_list("Installation", &config.installation_steps);
    render_list("Tips", &config.tips);
}

fn render_update(update: &UpdateRecord) {
    let age = Utc::now().date_naive() - update.release_date;
    println!(
        "- #{} {} {} [{} / {}] {} ({} days ago) {}",
        update.id,
        update.model,
        update.version,
        update.update_type.label(),
        update.status.as_str(),
        update.release_date.format("%b %-d, %Y"),
        age.num_days(),
        update.size
    );
    println!("  {}", update.description);
}

fn render_update_listing(listing: &UpdateListing) {
    println!(
        "{} of {} updates (major {}, security {}, feature {})",
        listing.updates.len(),
        listing.stats.total,
        listing.stats.major,
        listing.stats.security,
        listing.stats.feature
    );
    for update in &listing.updates {
        render_update(update);
    }
}
