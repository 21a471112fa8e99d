use chrono::NaiveDate;
use clap::Parser;

use wellnest_dashboard_lib::{window::local_today, ViewMode};

#[derive(Parser)]
#[command(name = "wellnest-dashboard")]
#[command(about = "Print the WellNest dashboard summary for a reporting window")]
struct Args {
  /// daily, weekly or monthly
  #[arg(long, default_value = "weekly")]
  view: ViewMode,

  /// Reference date (YYYY-MM-DD), defaults to today
  #[arg(long)]
  date: Option<NaiveDate>,

  /// Trailing window ending on the date instead of the calendar window
  #[arg(long)]
  rolling: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let args = Args::parse();
  let reference = args.date.unwrap_or_else(local_today);

  let snapshot = wellnest_dashboard_lib::run(args.view, reference, args.rolling).await?;
  println!("{}", serde_json::to_string_pretty(&snapshot)?);

  Ok(())
}
