use crate::core::{PercentOff, Pipeline};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Aggregate purchase records with composable discount rules
#[derive(Parser, Debug)]
#[command(name = "discount-engine")]
#[command(about = "Aggregate purchase records with composable discount rules", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing purchase records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Customer tier selecting which discount rules are enabled
    #[arg(
        long = "tier",
        value_name = "TIER",
        default_value = "guest",
        help = "Customer tier: 'guest' (no discount), 'member' (10%), or 'vip' (10% then 5%)"
    )]
    pub tier: TierType,

    /// Report to produce
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "total",
        help = "Report: 'total' (discounted grand total), 'grouped' (raw subtotals by item), or 'top' (most expensive record)"
    )]
    pub report: ReportType,

    /// Restrict aggregation to records with this item name
    #[arg(
        long = "item",
        value_name = "NAME",
        help = "Only aggregate records whose item matches NAME"
    )]
    pub item: Option<String>,
}

/// Customer tiers and the discount rules they enable
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TierType {
    Guest,
    Member,
    Vip,
}

/// Available report types
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportType {
    Total,
    Grouped,
    Top,
}

impl CliArgs {
    /// Build the discount pipeline for the selected tier
    ///
    /// The rule order is fixed and significant: the vip discount applies
    /// to the already-member-discounted price, never to the original.
    ///
    /// # Returns
    ///
    /// * Guest - the identity pipeline (no rules)
    /// * Member - [10% member discount]
    /// * Vip - [10% member discount, 5% vip discount], in that order
    pub fn to_pipeline(&self) -> Pipeline {
        match self.tier {
            TierType::Guest => Pipeline::identity(),
            TierType::Member => Pipeline::new(vec![Box::new(PercentOff::member())]),
            TierType::Vip => Pipeline::new(vec![
                Box::new(PercentOff::member()),
                Box::new(PercentOff::vip()),
            ]),
        }
    }
}
