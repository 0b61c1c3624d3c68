//! In-memory sample data rendered by the dashboard screens.
//!
//! Nothing here is fetched or persisted; the tables are fixed at compile time.

use std::fmt;

use serde::Serialize;

/// Rows that can be narrowed by a free-text search box.
pub trait Searchable {
    /// Fields the search box looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match over [`Searchable::search_fields`].
    /// An empty query matches everything.
    fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.search_fields().iter().any(|field| field.to_lowercase().contains(&query))
    }
}

/// Returns the rows matching `query`, preserving their order.
pub fn filter_rows<'a, T: Searchable>(rows: &'a [T], query: &str) -> Vec<&'a T> {
    rows.iter().filter(|row| row.matches(query)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub key: &'static str,
    pub label: &'static str,
    pub value: u32,
    pub delta: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Danger,
    Success,
}

impl AlertSeverity {
    /// Badge text shown next to an alert.
    pub const fn label(&self) -> &'static str {
        match self {
            AlertSeverity::Warning => "Warning",
            AlertSeverity::Danger => "Critical",
            AlertSeverity::Success => "Info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub id: &'static str,
    pub title: &'static str,
    pub timestamp: &'static str,
    pub severity: AlertSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecentProduct {
    pub id: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Batch {
    pub id: &'static str,
    pub product: &'static str,
    pub facility: &'static str,
    pub quantity: u32,
    pub production_window: &'static str,
    pub expiry: &'static str,
}

impl Searchable for Batch {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id, self.product, self.facility]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageStatus {
    PackageAllocated,
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageStatus::PackageAllocated => f.write_str("PACKAGE_ALLOCATED"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Package {
    pub id: &'static str,
    pub product: &'static str,
    pub batch: &'static str,
    pub quantity: u32,
    pub status: PackageStatus,
    pub sensors: &'static [&'static str],
    pub qr: &'static str,
}

impl Searchable for Package {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id, self.product, self.batch]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub note: &'static str,
    pub category: &'static str,
    pub temperature_range: &'static str,
    pub updated: Option<&'static str>,
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.note, self.category]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    Pending,
    InTransit,
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipmentStatus::Pending => f.write_str("PENDING"),
            ShipmentStatus::InTransit => f.write_str("IN_TRANSIT"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shipment {
    pub id: &'static str,
    pub destination: &'static str,
    pub items: u32,
    pub status: ShipmentStatus,
    pub legs: u32,
}

impl Searchable for Shipment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id, self.destination]
    }
}

/// Package available for allocation to a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AllocatablePackage {
    pub id: &'static str,
    pub quantity: u32,
}

pub const METRICS: &[Metric] = &[
    Metric {
        key: "products",
        label: "Total Products",
        value: 4,
        delta: "+1% from last week",
    },
    Metric {
        key: "shipments",
        label: "Active Shipments",
        value: 0,
        delta: "+11% from last week",
    },
    Metric {
        key: "alerts",
        label: "Active Alerts",
        value: 6,
        delta: "+12% from last week",
    },
    Metric {
        key: "doses",
        label: "Doses Administered",
        value: 0,
        delta: "+16% from last week",
    },
];

pub const RECENT_PRODUCTS: &[RecentProduct] = &[
    RecentProduct {
        id: "PF-2024-001",
        action: "View",
    },
    RecentProduct {
        id: "MOD-2024-002",
        action: "View",
    },
    RecentProduct {
        id: "PF-2024-001",
        action: "View",
    },
];

pub const ALERTS: &[Alert] = &[
    Alert {
        id: "1",
        title: "Vaccines expiring within 30 days",
        timestamp: "27/11/2025, 07:31:30",
        severity: AlertSeverity::Warning,
    },
    Alert {
        id: "2",
        title: "Critical temperature breach detected",
        timestamp: "27/11/2025, 12:31:30",
        severity: AlertSeverity::Danger,
    },
    Alert {
        id: "3",
        title: "Vaccine inventory below threshold",
        timestamp: "27/11/2025, 09:31:30",
        severity: AlertSeverity::Success,
    },
];

pub const BATCHES: &[Batch] = &[
    Batch {
        id: "Batch 9b971814-20ce-4b26-ab67-781ab355805c",
        product: "Pfizer",
        facility: "Plant B",
        quantity: 2000,
        production_window: "28 Nov 2025 - 6:48 to 1 Dec 2025 - 6:48",
        expiry: "11 Apr 2026 - 5:30",
    },
    Batch {
        id: "Batch 75dc3937-b80d-4e8f-9031-c34d077daffd",
        product: "Chinoform",
        facility: "Plant B",
        quantity: 5000,
        production_window: "29 Nov 2025 - 6:47 to 6 Dec 2025 - 6:47",
        expiry: "10 Jan 2026 - 5:30",
    },
    Batch {
        id: "Batch 4209e198-022a-470d-b55f-056d88a7700c",
        product: "Malaria Vaccine",
        facility: "Plant A",
        quantity: 1000,
        production_window: "19 Nov 2025 - 6:45 to 26 Nov 2025 - 6:45",
        expiry: "6 Dec 2025 - 5:30",
    },
    Batch {
        id: "Batch 1e068523-e174-418b-ad6c-2baddb631881",
        product: "Pfizer",
        facility: "Plant A",
        quantity: 5000,
        production_window: "29 Oct 2025 - 14:01 to 6 Nov 2025 - 14:01",
        expiry: "30 Oct 2025 - 5:30",
    },
];

const ALL_SENSORS: &[&str] = &["Open-Close Sensor", "GPS", "Temperature"];

pub const PACKAGES: &[Package] = &[
    Package {
        id: "Package 39804b1b-da40-4de6-ba67-15e062921814",
        product: "Malaria Vaccine",
        batch: "Batch 4209e198-022a-470d-b55f-056d88a7700c",
        quantity: 50,
        status: PackageStatus::PackageAllocated,
        sensors: ALL_SENSORS,
        qr: "PKG|39804b1b|4209e198|GPS|Temp|OpenClose",
    },
    Package {
        id: "Package f5e741ad-b949-4dbd-953d-1828264b46c4",
        product: "Chinoform",
        batch: "Batch 75dc3937-b80d-4e8f-9031-c34d077daffd",
        quantity: 50,
        status: PackageStatus::PackageAllocated,
        sensors: ALL_SENSORS,
        qr: "PKG|f5e741ad|75dc3937|GPS|Temp|OpenClose",
    },
    Package {
        id: "Package 0adeba2d-d6d3-41ca-a858-12e37845bf96",
        product: "Pfizer",
        batch: "Batch 9b971814-20ce-4b26-ab67-781ab355805c",
        quantity: 50,
        status: PackageStatus::PackageAllocated,
        sensors: &["GPS", "Open-Close Sensor", "Temperature"],
        qr: "PKG|0adeba2d|9b971814|GPS|Temp|OpenClose",
    },
    Package {
        id: "Package b9318c89-683e-4ad6-9b19-962647c4ead9",
        product: "Chinoform",
        batch: "Batch 75dc3937-b80d-4e8f-9031-c34d077daffd",
        quantity: 50,
        status: PackageStatus::PackageAllocated,
        sensors: &["Open-Close Sensor", "Temperature", "GPS"],
        qr: "PKG|b9318c89|75dc3937|GPS|Temp|OpenClose",
    },
];

pub const PRODUCTS: &[Product] = &[
    Product {
        id: "p1",
        name: "Malaria Vaccine",
        note: "Keep in temperature condition",
        category: "Vaccine",
        temperature_range: "-5C - 5C",
        updated: None,
    },
    Product {
        id: "p2",
        name: "Chinoform",
        note: "keep temperature",
        category: "Vaccine",
        temperature_range: "0C - 10C",
        updated: Some("18/11/2025, 19:44:00"),
    },
    Product {
        id: "p3",
        name: "Pfizer",
        note: "sdsdsssccsvdfv",
        category: "Vaccine",
        temperature_range: "2C - 8C",
        updated: None,
    },
];

pub const CATEGORIES: &[Category] = &[Category { id: "fish", name: "Fish" }, Category { id: "vaccine", name: "Vaccine" }];

pub const SHIPMENTS: &[Shipment] = &[
    Shipment {
        id: "ef182ee0-515e-48f6-9eb2-9161f21c020d",
        destination: "140c9326-86fa-49cd-b98d-270239270d80",
        items: 3,
        status: ShipmentStatus::Pending,
        legs: 1,
    },
    Shipment {
        id: "e3969dbc-899c-42c1-aa42-d8e25da4b339",
        destination: "140c9326-86fa-49cd-b98d-270239270d80",
        items: 1,
        status: ShipmentStatus::Pending,
        legs: 2,
    },
    Shipment {
        id: "54656c3b-2200-4366-aec8-b7b24b43d132",
        destination: "140c9326-86fa-49cd-b98d-270239270d80",
        items: 1,
        status: ShipmentStatus::InTransit,
        legs: 2,
    },
];

pub const ALLOCATABLE_PACKAGES: &[AllocatablePackage] = &[
    AllocatablePackage {
        id: "39804b1b-da40-4de6-ba67-15e062921814",
        quantity: 50,
    },
    AllocatablePackage {
        id: "f5e741ad-b949-4dbd-953d-1828264b46c4",
        quantity: 50,
    },
    AllocatablePackage {
        id: "0adeba2d-d6d3-41ca-a858-12e37845bf96",
        quantity: 50,
    },
    AllocatablePackage {
        id: "b9318c89-683e-4ad6-9b19-962647c4ead9",
        quantity: 50,
    },
    AllocatablePackage {
        id: "f27f0562-6123-4e4f-9a4a-fcef58edb012",
        quantity: 50,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_keeps_every_row() {
        assert_eq!(filter_rows(BATCHES, "  ").len(), BATCHES.len());
    }

    #[test]
    fn query_matches_case_insensitively_and_keeps_order() {
        let rows = filter_rows(BATCHES, "pfizer");
        let ids: Vec<&str> = rows.iter().map(|batch| batch.id).collect();
        assert_eq!(
            ids,
            vec![
                "Batch 9b971814-20ce-4b26-ab67-781ab355805c",
                "Batch 1e068523-e174-418b-ad6c-2baddb631881"
            ]
        );
    }

    #[test]
    fn packages_match_on_their_batch_reference() {
        let rows = filter_rows(PACKAGES, "75dc3937");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|package| package.product == "Chinoform"));
    }

    #[test]
    fn statuses_render_in_their_wire_form() {
        assert_eq!(ShipmentStatus::InTransit.to_string(), "IN_TRANSIT");
        assert_eq!(serde_json::to_value(PackageStatus::PackageAllocated).unwrap(), "PACKAGE_ALLOCATED");
        assert_eq!(AlertSeverity::Danger.label(), "Critical");
    }
}
