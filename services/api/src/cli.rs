use crate::demo::{run_demo, run_tool, run_tools_listing, run_updates, DemoArgs, UpdatesArgs};
use crate::infra::parse_wire;
use crate::server;
use clap::{Args, Parser, Subcommand};
use galaxy_toolkit::directory::CategoryFilter;
use galaxy_toolkit::error::AppError;
use galaxy_toolkit::tools::battery::{BatteryForm, ChargingHabit, HeatExposure, UsagePattern};
use galaxy_toolkit::tools::comparison::ComparisonForm;
use galaxy_toolkit::tools::customization::{
    CustomizationFeature, CustomizationForm, CustomizationStyle, OneUiVersion,
};
use galaxy_toolkit::tools::firmware::FirmwareForm;
use galaxy_toolkit::tools::trade_in::{DeviceCondition, StorageTier, TradeInForm};
use galaxy_toolkit::tools::upgrade::{Budget, Priority, Timeframe, UpgradeForm};
use galaxy_toolkit::tools::ToolRequest;

#[derive(Parser, Debug)]
#[command(
    name = "Galaxy Toolkit",
    about = "Samsung device utility calculators over HTTP or from the command line",
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
    /// Estimate the trade-in value of a device
    TradeIn(TradeInArgs),
    /// Score battery health from age and habits
    Battery(BatteryArgs),
    /// Compare two catalog models category by category
    Compare(CompareArgs),
    /// Check firmware compatibility and update risk
    Firmware(FirmwareArgs),
    /// Generate a One UI customization config
    Customize(CustomizeArgs),
    /// Recommend an upgrade for the current device
    Upgrade(UpgradeArgs),
    /// List tracked One UI and Android updates
    Updates(UpdatesArgs),
    /// List the available tools
    Tools(ToolsArgs),
    /// Walk every tool through a session with sample inputs
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
struct TradeInArgs {
    #[arg(long)]
    model: Option<String>,
    /// excellent, good, fair or poor
    #[arg(long, value_parser = parse_wire::<DeviceCondition>)]
    condition: Option<DeviceCondition>,
    /// 64GB, 128GB, 256GB, 512GB or 1TB
    #[arg(long, value_parser = parse_wire::<StorageTier>)]
    storage: Option<StorageTier>,
}

#[derive(Args, Debug)]
struct BatteryArgs {
    #[arg(long)]
    model: Option<String>,
    /// Device age in months
    #[arg(long)]
    age: Option<u32>,
    /// light, moderate, heavy or gaming
    #[arg(long, value_parser = parse_wire::<UsagePattern>)]
    usage: Option<UsagePattern>,
    /// overnight, frequent, depleted or wireless
    #[arg(long, value_parser = parse_wire::<ChargingHabit>)]
    charging: Option<ChargingHabit>,
    /// low, moderate or high
    #[arg(long, value_parser = parse_wire::<HeatExposure>)]
    heat: Option<HeatExposure>,
}

#[derive(Args, Debug)]
struct CompareArgs {
    #[arg(long)]
    model1: Option<String>,
    #[arg(long)]
    model2: Option<String>,
}

#[derive(Args, Debug)]
struct FirmwareArgs {
    #[arg(long)]
    model: Option<String>,
    /// Carrier/region code, e.g. XAA or TMB
    #[arg(long)]
    csc: Option<String>,
    /// Installed build number, if known
    #[arg(long)]
    current_firmware: Option<String>,
}

#[derive(Args, Debug)]
struct CustomizeArgs {
    #[arg(long)]
    model: Option<String>,
    /// 6.0, 5.1, 5.0 or 4.1
    #[arg(long = "one-ui", value_parser = parse_wire::<OneUiVersion>)]
    one_ui_version: Option<OneUiVersion>,
    /// Repeat for each feature, e.g. --feature good-lock --feature themes
    #[arg(long = "feature", value_parser = parse_wire::<CustomizationFeature>)]
    features: Vec<CustomizationFeature>,
    /// minimal, colorful, dark, gaming or productivity
    #[arg(long, value_parser = parse_wire::<CustomizationStyle>)]
    style: Option<CustomizationStyle>,
}

#[derive(Args, Debug)]
struct UpgradeArgs {
    #[arg(long)]
    current_model: Option<String>,
    /// Repeat for each priority, e.g. --priority camera --priority price
    #[arg(long = "priority", value_parser = parse_wire::<Priority>)]
    priorities: Vec<Priority>,
    /// under-500, 500-800, 800-1200, over-1200 or no-limit
    #[arg(long, value_parser = parse_wire::<Budget>)]
    budget: Option<Budget>,
    /// immediate, 3-months, 6-months or 1-year
    #[arg(long, value_parser = parse_wire::<Timeframe>)]
    timeframe: Option<Timeframe>,
}

#[derive(Args, Debug)]
pub(crate) struct ToolsArgs {
    /// Case-insensitive text matched against title and description
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// all, trade-in, technical, comparison or customization
    #[arg(long, value_parser = parse_wire::<CategoryFilter>, default_value = "all")]
    pub(crate) category: CategoryFilter,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::TradeIn(args) => {
            run_tool(ToolRequest::TradeIn(TradeInForm {
                model: args.model,
                condition: args.condition,
                storage: args.storage,
            }))
            .await
        }
        Command::Battery(args) => {
            run_tool(ToolRequest::BatteryHealth(BatteryForm {
                model: args.model,
                phone_age: args.age,
                usage_pattern: args.usage,
                charging_habits: args.charging,
                heat_exposure: args.heat,
            }))
            .await
        }
        Command::Compare(args) => {
            run_tool(ToolRequest::PhoneComparison(ComparisonForm {
                model1: args.model1,
                model2: args.model2,
            }))
            .await
        }
        Command::Firmware(args) => {
            run_tool(ToolRequest::FirmwareChecker(FirmwareForm {
                model: args.model,
                csc: args.csc,
                current_firmware: args.current_firmware,
            }))
            .await
        }
        Command::Customize(args) => {
            run_tool(ToolRequest::CustomizationGenerator(CustomizationForm {
                model: args.model,
                one_ui_version: args.one_ui_version,
                features: args.features,
                style: args.style,
            }))
            .await
        }
        Command::Upgrade(args) => {
            run_tool(ToolRequest::UpgradeAdvisor(UpgradeForm {
                current_model: args.current_model,
                priorities: args.priorities,
                budget: args.budget,
                timeframe: args.timeframe,
            }))
            .await
        }
        Command::Updates(args) => run_updates(args),
        Command::Tools(args) => {
            run_tools_listing(args);
            Ok(())
        }
        Command::Demo(args) => run_demo(args).await,
    }
}
