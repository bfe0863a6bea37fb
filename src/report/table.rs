//! Year-by-year cash flow table as CSV

use crate::error::Result;
use crate::projection::YearRecord;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct TableRow {
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "Energy Tariff (COP/kWh)")]
    energy_tariff: f64,
    #[serde(rename = "Energy Revenue (COP)")]
    energy_revenue: f64,
    #[serde(rename = "Tax Deduction (COP)")]
    tax_deduction: f64,
    #[serde(rename = "O&M Cost (COP)")]
    om_cost: f64,
    #[serde(rename = "Net Cash Flow (COP)")]
    net_cash_flow: f64,
    #[serde(rename = "Discounted Cash Flow (COP)")]
    discounted_cash_flow: f64,
    #[serde(rename = "Cumulative Net (COP)")]
    cumulative_net: f64,
    #[serde(rename = "Cumulative Discounted (COP)")]
    cumulative_discounted: f64,
}

impl From<&YearRecord> for TableRow {
    fn from(r: &YearRecord) -> Self {
        Self {
            year: r.year,
            energy_tariff: r.energy_tariff,
            energy_revenue: r.energy_revenue,
            tax_deduction: r.tax_deduction,
            om_cost: r.om_cost,
            net_cash_flow: r.net_cash_flow,
            discounted_cash_flow: r.discounted_cash_flow,
            cumulative_net: r.cumulative_net,
            cumulative_discounted: r.cumulative_discounted,
        }
    }
}

/// Write one header line plus one row per year
pub fn write_table_csv<W: Write>(records: &[YearRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(TableRow::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::ProjectParameters;
    use crate::projection::compute;

    #[test]
    fn test_table_shape() {
        let result = compute(&ProjectParameters::default()).unwrap();
        let mut buf = Vec::new();
        write_table_csv(&result.records, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 26);
        assert!(lines[0].starts_with("Year,Energy Tariff (COP/kWh),Energy Revenue (COP)"));
        assert!(lines[1].starts_with("1,"));
        assert!(lines[25].starts_with("25,"));

        let mut rdr = csv::Reader::from_reader(text.as_bytes());
        assert_eq!(rdr.headers().unwrap().len(), 9);
    }
}
