//! Business plan CLI
//!
//! Lists hotel companies in a zone scope and projects per-stay insurance
//! economics for one of them.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use stay_cover::company::{resolve_company, CachedCompanySource, DatasetCatalog, REVENUE_UNIT};
use stay_cover::format::{count, money, percent, month_abbrev};
use stay_cover::projection::{write_annual_csv, write_monthly_csv};
use stay_cover::assumptions::STANDARD_HORIZONS;
use stay_cover::{
    DirectAssumptions, HotelAssumptions, PlanResult, ProjectionEngine, ScenarioConfig, Scope,
    VolumeStrategy, ZoneSelection,
};

#[derive(Parser)]
#[command(name = "business_plan", version, about = "Per-stay hotel insurance business plan")]
struct Cli {
    /// Directory holding <market>_<vertical>_<zone>_cleaned.csv datasets
    #[arg(long, default_value = "Data_Clean", global = true)]
    data_dir: PathBuf,

    /// Zone scope: France, Europe or "Europe + France"
    #[arg(long, default_value = "France", global = true)]
    zone: ZoneSelection,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List hotel companies in scope, largest revenue first
    Companies {
        #[arg(long, default_value_t = 25)]
        limit: usize,
    },
    /// Project insurance economics for one company
    Plan(PlanArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Operational,
    Direct,
}

#[derive(Args)]
struct PlanArgs {
    /// Company name (defaults to the largest company in scope)
    #[arg(long)]
    company: Option<String>,

    /// Annual revenue in millions, instead of a dataset company
    #[arg(long, conflicts_with = "company")]
    revenue_m: Option<f64>,

    /// JSON scenario file; flags below override its values
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Revenue-to-stays conversion
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    #[arg(long)]
    rooms: Option<u32>,
    #[arg(long)]
    occupancy: Option<f64>,
    #[arg(long)]
    avg_stay: Option<f64>,
    #[arg(long)]
    avg_revenue_per_stay: Option<f64>,

    /// Insurance price per stay
    #[arg(long)]
    price: Option<f64>,
    #[arg(long)]
    take_rate: Option<f64>,
    #[arg(long)]
    claim_rate: Option<f64>,
    #[arg(long)]
    claim_cost: Option<f64>,

    /// Projection horizon in years (standard: 1, 3 or 5)
    #[arg(long)]
    horizon: Option<u32>,
    /// Year-over-year hotel revenue growth (0.05 = 5%)
    #[arg(long, allow_hyphen_values = true)]
    growth: Option<f64>,
    #[arg(long)]
    amplitude: Option<f64>,
    /// Peak month, 1 = January
    #[arg(long)]
    peak_month: Option<u32>,

    /// Write the monthly table as CSV
    #[arg(long)]
    monthly_csv: Option<PathBuf>,
    /// Write the annual table as CSV
    #[arg(long)]
    annual_csv: Option<PathBuf>,
    /// Print the full result as JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl PlanArgs {
    fn scenario(&self) -> Result<ScenarioConfig> {
        let mut scenario = match &self.scenario {
            Some(path) => ScenarioConfig::from_path(path)
                .with_context(|| format!("Failed to load scenario {}", path.display()))?,
            None => ScenarioConfig::default(),
        };

        match (self.mode, scenario.strategy) {
            (Some(Mode::Operational), VolumeStrategy::Direct(_)) => {
                scenario.strategy = VolumeStrategy::Operational(HotelAssumptions::default());
            }
            (Some(Mode::Direct), VolumeStrategy::Operational(_)) => {
                scenario.strategy = VolumeStrategy::Direct(DirectAssumptions::default());
            }
            _ => {}
        }

        match &mut scenario.strategy {
            VolumeStrategy::Operational(hotel) => {
                if let Some(v) = self.rooms { hotel.rooms = v; }
                if let Some(v) = self.occupancy { hotel.occupancy = v; }
                if let Some(v) = self.avg_stay { hotel.avg_stay_nights = v; }
                if self.avg_revenue_per_stay.is_some() {
                    log::warn!("--avg-revenue-per-stay ignored in operational mode");
                }
            }
            VolumeStrategy::Direct(direct) => {
                if let Some(v) = self.avg_revenue_per_stay { direct.avg_revenue_per_stay = v; }
                if self.rooms.is_some() || self.occupancy.is_some() || self.avg_stay.is_some() {
                    log::warn!("Hotel operating flags ignored in direct mode");
                }
            }
        }

        let ins = &mut scenario.insurance;
        if let Some(v) = self.price { ins.price_per_stay = v; }
        if let Some(v) = self.take_rate { ins.take_rate = v; }
        if let Some(v) = self.claim_rate { ins.claim_rate = v; }
        if let Some(v) = self.claim_cost { ins.avg_claim_cost = v; }

        let proj = &mut scenario.projection;
        if let Some(v) = self.horizon { proj.horizon_years = v; }
        if let Some(v) = self.growth { proj.yoy_growth = v; }
        if let Some(v) = self.amplitude { proj.seasonality_amplitude = v; }
        if let Some(v) = self.peak_month { proj.peak_month = v; }

        scenario.validate().context("Invalid scenario")?;
        if !scenario.projection.is_standard_horizon() {
            log::warn!(
                "Horizon of {} year(s) is outside the standard set {:?}",
                scenario.projection.horizon_years,
                STANDARD_HORIZONS
            );
        }
        Ok(scenario)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let scope = Scope::hotels(cli.zone.zones());
    let source = CachedCompanySource::new(DatasetCatalog::from_dir(&cli.data_dir));

    let needs_datasets = match &cli.command {
        Command::Companies { .. } => true,
        Command::Plan(args) => args.revenue_m.is_none(),
    };
    if needs_datasets && !has_datasets(source.inner())? {
        eprintln!("No cleaned CSV datasets found in {}", cli.data_dir.display());
        return Ok(());
    }

    match &cli.command {
        Command::Companies { limit } => {
            let companies = source
                .lookup(&scope)
                .with_context(|| format!("Failed to load companies for {}", scope))?;
            if companies.is_empty() {
                eprintln!("No dataset found for {} in {}", scope, cli.data_dir.display());
                return Ok(());
            }
            println!("{:>4}  {:<40} {:<16} {:>16}", "#", "Company", "Country", "Revenue");
            println!("{}", "-".repeat(80));
            for (rank, c) in companies.iter().take(*limit).enumerate() {
                println!("{:>4}  {:<40} {:<16} {:>16}", rank + 1, c.name, c.country, money(c.annual_revenue, "€"));
            }
            if companies.len() > *limit {
                println!("... ({} more)", companies.len() - limit);
            }
        }
        Command::Plan(args) => {
            let scenario = args.scenario()?;

            let (company, annual_revenue) = match args.revenue_m {
                Some(revenue_m) => ("Custom revenue".to_string(), revenue_m * REVENUE_UNIT),
                None => {
                    let companies = source
                        .lookup(&scope)
                        .with_context(|| format!("Failed to load companies for {}", scope))?;
                    match resolve_company(&companies, args.company.as_deref(), &scope)? {
                        Some(c) => (format!("{} ({})", c.name, c.country), c.annual_revenue),
                        None => {
                            eprintln!(
                                "No companies available for {} in {}",
                                scope,
                                cli.data_dir.display()
                            );
                            return Ok(());
                        }
                    }
                }
            };

            let engine = ProjectionEngine::from_scenario(&scenario);
            let plan = engine.project(annual_revenue);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&company, &scenario, &plan);
            }

            if let Some(path) = &args.monthly_csv {
                let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
                write_monthly_csv(&plan.monthly, BufWriter::new(file))?;
                eprintln!("Monthly table written to {}", path.display());
            }
            if let Some(path) = &args.annual_csv {
                let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
                write_annual_csv(&plan.annual, BufWriter::new(file))?;
                eprintln!("Annual table written to {}", path.display());
            }
        }
    }

    Ok(())
}

fn has_datasets(catalog: &DatasetCatalog) -> Result<bool> {
    let datasets = catalog
        .list_datasets()
        .with_context(|| format!("Unable to read {}", catalog.data_dir().display()))?;
    log::debug!("{} dataset(s) in {}", datasets.len(), catalog.data_dir().display());
    Ok(!datasets.is_empty())
}

fn print_plan(company: &str, scenario: &ScenarioConfig, plan: &PlanResult) {
    let cur = scenario.currency.as_str();
    let p = &plan.point;

    println!("Company Business Plan: {}", company);
    println!("Strategy: {}", plan.strategy);
    println!();
    println!("  Hotel revenue (annual):   {}", money(p.hotel_revenue, cur));
    println!("  Estimated ADR (/night):   {}", money(p.implied_adr, cur));
    println!("  Room-nights sold:         {}", count(p.room_nights_sold));
    println!("  Stays (annual):           {}", count(p.stays));
    println!("  Policies sold (annual):   {}", count(p.policies));
    println!("  Gross insurance revenue:  {}", money(p.gross_insurance_revenue, cur));
    println!("  Expected claims:          {}", money(p.claims, cur));
    println!("  Net insurance revenue:    {}", money(p.net_insurance_revenue, cur));
    println!("  Loss ratio:               {}", percent(p.loss_ratio));
    println!();

    let proj = &scenario.projection;
    println!(
        "Monthly (Year 1), seasonality amp {:.2}, peak {}",
        proj.seasonality_amplitude,
        month_abbrev(proj.peak_month)
    );
    println!("{:>5} {:>8} {:>16} {:>10} {:>10} {:>14} {:>14} {:>14}",
        "Month", "Weight", "HotelRevenue", "Stays", "Policies", "Gross", "Claims", "Net");
    println!("{}", "-".repeat(98));
    for row in &plan.monthly.rows {
        println!("{:>5} {:>8.4} {:>16} {:>10} {:>10} {:>14} {:>14} {:>14}",
            row.label(),
            row.weight,
            money(row.hotel_revenue, cur),
            count(row.stays),
            count(row.policies),
            money(row.gross_insurance_revenue, cur),
            money(row.claims, cur),
            money(row.net_insurance_revenue, cur),
        );
    }
    println!();

    println!("Annual projection ({} year(s), YoY growth {})", proj.horizon_years, percent(proj.yoy_growth));
    println!("{:>5} {:>16} {:>10} {:>14} {:>14} {:>14} {:>8}",
        "Year", "HotelRevenue", "Policies", "Gross", "Claims", "Net", "LR");
    println!("{}", "-".repeat(88));
    for row in &plan.annual.rows {
        println!("{:>5} {:>16} {:>10} {:>14} {:>14} {:>14} {:>8}",
            row.year,
            money(row.hotel_revenue, cur),
            count(row.policies),
            money(row.gross_insurance_revenue, cur),
            money(row.claims, cur),
            money(row.net_insurance_revenue, cur),
            percent(row.loss_ratio),
        );
    }

    let summary = plan.summary();
    println!();
    println!("Horizon totals:");
    println!("  Policies: {}", count(summary.total_policies));
    println!("  Gross:    {}", money(summary.total_gross_insurance_revenue, cur));
    println!("  Claims:   {}", money(summary.total_claims, cur));
    println!("  Net:      {}", money(summary.total_net_insurance_revenue, cur));
    println!("  LR:       {}", percent(summary.horizon_loss_ratio));
}
