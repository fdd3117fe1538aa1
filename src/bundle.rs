//! The customization bundle: everything a tenant hands to the shell.
//!
//! A bundle is exactly three values: the configuration, the panel registry,
//! and the reference data. The shell reads them at startup and on each tab
//! navigation; nothing flows back.

use crate::charts::{ChartConfig, ChartKind, DataPoint};
use crate::config::{AnalyticsSection, AppConfig, Client, DashboardSection, TabConfig};
use crate::icons::Icon;
use crate::reference::ReferenceData;
use crate::registry::PanelRegistry;
use std::collections::BTreeMap;

pub struct Customization {
    pub config: AppConfig,
    pub panels: PanelRegistry,
    pub reference: ReferenceData,
}

impl Customization {
    /// The built-in property-management sample bundle.
    pub fn sample() -> Self {
        Self {
            config: sample_config(),
            panels: PanelRegistry::builtin(),
            reference: ReferenceData::standard(),
        }
    }

    /// A bundle around an externally loaded config, with the built-in panels
    /// and reference data.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            panels: PanelRegistry::builtin(),
            reference: ReferenceData::standard(),
        }
    }
}

/// The sample tenant configuration written by `dashdeck init`.
pub fn sample_config() -> AppConfig {
    let mut dashboard_charts = BTreeMap::new();
    dashboard_charts.insert(
        "propertyStatus".to_string(),
        ChartConfig {
            kind: ChartKind::Pie,
            data_keys: vec!["value".to_string()],
            colors: vec!["#4F46E5".to_string(), "#818CF8".to_string()],
            data: vec![
                DataPoint::new("Occupied", &[("value", 60.0)]),
                DataPoint::new("Vacant", &[("value", 40.0)]),
            ],
        },
    );
    dashboard_charts.insert(
        "invoiceStatus".to_string(),
        ChartConfig {
            kind: ChartKind::Bar,
            data_keys: vec!["count".to_string()],
            colors: vec!["#4F46E5".to_string()],
            data: vec![
                DataPoint::new("Pending", &[("count", 10.0)]),
                DataPoint::new("Paid", &[("count", 15.0)]),
                DataPoint::new("Overdue", &[("count", 5.0)]),
            ],
        },
    );

    let mut analytics_charts = BTreeMap::new();
    analytics_charts.insert(
        "revenueGrowth".to_string(),
        ChartConfig {
            kind: ChartKind::Line,
            data_keys: vec!["growth".to_string()],
            colors: vec!["#4F46E5".to_string()],
            data: vec![
                DataPoint::new("2020", &[("growth", 20.0)]),
                DataPoint::new("2021", &[("growth", 25.0)]),
                DataPoint::new("2022", &[("growth", 30.0)]),
                DataPoint::new("2023", &[("growth", 35.0)]),
            ],
        },
    );

    let features = [
        ("propertyManagement", true),
        ("invoiceProcessing", true),
        ("taxAdvice", true),
        ("dataImport", true),
        ("reporting", true),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect();

    AppConfig {
        title: "QuoinStone Group - Property Management".to_string(),
        company_name: "QuoinStone Group".to_string(),
        logo: "assets/quoinstone-logo.png".to_string(),
        primary_color: "#4F46E5".to_string(),
        secondary_color: "#818CF8".to_string(),
        user_name: "Tim Struth".to_string(),
        dashboard: DashboardSection {
            tabs: vec![
                TabConfig {
                    id: "propertyOccupation".to_string(),
                    label: "Property Occupation".to_string(),
                    description: "Manage property occupation cycles".to_string(),
                    icon: Icon::Home,
                },
                TabConfig {
                    id: "invoiceProcessing".to_string(),
                    label: "Invoice Processing".to_string(),
                    description: "Process and track invoices".to_string(),
                    icon: Icon::FileText,
                },
            ],
            charts: dashboard_charts,
        },
        analytics: AnalyticsSection {
            charts: analytics_charts,
        },
        clients: vec![
            Client {
                id: "client1".to_string(),
                name: "Major Retailer A".to_string(),
                industry: "Retail".to_string(),
            },
            Client {
                id: "client2".to_string(),
                name: "Office Space Corp".to_string(),
                industry: "Commercial Real Estate".to_string(),
            },
            Client {
                id: "client3".to_string(),
                name: "Shopping Mall Group".to_string(),
                industry: "Retail".to_string(),
            },
        ],
        features,
    }
}
