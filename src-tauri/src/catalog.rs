//! Static table of measurement categories and the units offered in each.

use serde::Serialize;

use crate::error::ConverterError;

/// A named group of mutually convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitCategory {
    pub name: &'static str,
    pub units: &'static [&'static str],
}

const CATEGORIES: &[UnitCategory] = &[
    UnitCategory {
        name: "Area",
        units: &[
            "square meters",
            "square kilometers",
            "square miles",
            "square feet",
            "hectares",
            "acres",
        ],
    },
    UnitCategory {
        name: "Data Transfer Rate",
        units: &[
            "bits per second",
            "kilobits per second",
            "megabits per second",
            "gigabits per second",
        ],
    },
    UnitCategory {
        name: "Digital Storage",
        units: &["bytes", "kilobytes", "megabytes", "gigabytes", "terabytes"],
    },
    UnitCategory {
        name: "Energy",
        units: &[
            "joules",
            "kilojoules",
            "calories",
            "kilocalories",
            "watt-hours",
            "kilowatt-hours",
        ],
    },
    UnitCategory {
        name: "Frequency",
        units: &["hertz", "kilohertz", "megahertz", "gigahertz"],
    },
    UnitCategory {
        name: "Fuel Economy",
        units: &["miles per gallon", "kilometers per liter", "liters per 100 km"],
    },
    UnitCategory {
        name: "Length",
        units: &["meters", "kilometers", "miles", "feet", "centimeters", "inches"],
    },
    UnitCategory {
        name: "Mass",
        units: &["grams", "kilograms", "pounds", "ounces"],
    },
    UnitCategory {
        name: "Plane Angle",
        units: &["degrees", "radians", "gradians"],
    },
    UnitCategory {
        name: "Pressure",
        units: &[
            "pascals",
            "kilopascals",
            "bars",
            "atmospheres",
            "pounds per square inch",
        ],
    },
    UnitCategory {
        name: "Speed",
        units: &[
            "meters per second",
            "kilometers per hour",
            "miles per hour",
            "knots",
        ],
    },
    UnitCategory {
        name: "Temperature",
        units: &["celsius", "fahrenheit", "kelvin"],
    },
    UnitCategory {
        name: "Time",
        units: &["seconds", "minutes", "hours", "days", "weeks", "years"],
    },
    UnitCategory {
        name: "Volume",
        units: &["liters", "milliliters", "cubic meters", "cubic feet", "gallons"],
    },
];

/// All categories in display order.
pub fn categories() -> &'static [UnitCategory] {
    CATEGORIES
}

/// Category names in display order. The first one is the form default.
pub fn category_names() -> Vec<&'static str> {
    CATEGORIES.iter().map(|c| c.name).collect()
}

/// Ordered unit list for a category.
pub fn units_for(category: &str) -> Result<&'static [&'static str], ConverterError> {
    CATEGORIES
        .iter()
        .find(|c| c.name == category)
        .map(|c| c.units)
        .ok_or_else(|| ConverterError::UnknownCategory(category.to_string()))
}

/// Whether `unit` is offered for `category`. Unknown categories contain nothing.
pub fn contains_unit(category: &str, unit: &str) -> bool {
    units_for(category)
        .map(|units| units.contains(&unit))
        .unwrap_or(false)
}
