//! Reference data: closed enumerations for labeling and validation.
//!
//! Panels and dropdowns draw their vocabulary from here instead of from
//! free-form strings in configuration.

use serde::{Deserialize, Serialize};

/// Property categories a tenant manages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "title_case")]
pub enum PropertyType {
    Retail,
    Office,
    ShoppingCenter,
}

impl PropertyType {
    pub fn all() -> &'static [PropertyType] {
        &[
            PropertyType::Retail,
            PropertyType::Office,
            PropertyType::ShoppingCenter,
        ]
    }
}

/// Lifecycle states of an invoice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub fn all() -> &'static [InvoiceStatus] {
        &[
            InvoiceStatus::Pending,
            InvoiceStatus::Paid,
            InvoiceStatus::Overdue,
        ]
    }
}

/// Occupancy states a property moves through.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum OccupancyState {
    Vacant,
    Occupied,
}

impl OccupancyState {
    /// The action that moves a property out of this state.
    pub fn next_action(&self) -> &'static str {
        match self {
            OccupancyState::Vacant => "Occupy",
            OccupancyState::Occupied => "Vacate",
        }
    }
}

/// The read-only enumerations a bundle exposes to the shell.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub property_types: &'static [PropertyType],
    pub invoice_statuses: &'static [InvoiceStatus],
    /// The occupation cycle a property walks through, in order.
    pub occupation_cycle: Vec<OccupancyState>,
}

impl ReferenceData {
    pub fn standard() -> Self {
        Self {
            property_types: PropertyType::all(),
            invoice_statuses: InvoiceStatus::all(),
            occupation_cycle: vec![
                OccupancyState::Vacant,
                OccupancyState::Occupied,
                OccupancyState::Vacant,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_type_labels_are_human_readable() {
        assert_eq!(PropertyType::ShoppingCenter.to_string(), "Shopping Center");
        assert_eq!(PropertyType::Retail.to_string(), "Retail");
    }

    #[test]
    fn invoice_statuses_cover_the_full_lifecycle() {
        let labels: Vec<String> = InvoiceStatus::all().iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, vec!["Pending", "Paid", "Overdue"]);
    }

    #[test]
    fn occupancy_actions_alternate() {
        assert_eq!(OccupancyState::Vacant.next_action(), "Occupy");
        assert_eq!(OccupancyState::Occupied.next_action(), "Vacate");
    }

    #[test]
    // The standard cycle starts and ends vacant.
    fn standard_cycle_is_vacant_bounded() {
        let reference = ReferenceData::standard();
        assert_eq!(reference.occupation_cycle.first(), Some(&OccupancyState::Vacant));
        assert_eq!(reference.occupation_cycle.last(), Some(&OccupancyState::Vacant));
    }
}
