//! Fill an invoice-style document from a derive(Serialize) entity
//! Run with: cargo run --example fill_invoice

use docx_core::{Document, Paragraph, Table, TableRow};
use serde::Serialize;
use template::{fill_templates, Templatable};

#[derive(Serialize)]
struct Invoice {
    customer: String,
    number: String,
    lines: Vec<Line>,
}
impl Templatable for Invoice {}

#[derive(Serialize)]
struct Line {
    title: String,
    qty: String,
    price: String,
}
impl Templatable for Line {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Template body, as a host would prepare it
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::with_text("Invoice #{number}"));
    doc.add_paragraph(Paragraph::with_text("Billedto:#{customer}"));

    let mut table = Table::new();
    table.add_row(TableRow::with_cells(["<iterator(lines)>", "", ""]));
    table.add_row(TableRow::with_cells(["#{title}", "#{qty}", "#{price}"]));
    table.add_row(TableRow::with_cells(["</iterator(lines)>", "", ""]));
    doc.add_table(table);

    let invoice = Invoice {
        customer: "Alice".to_string(),
        number: "2024-001".to_string(),
        lines: vec![
            Line {
                title: "Widget".to_string(),
                qty: "2".to_string(),
                price: "10.00".to_string(),
            },
            Line {
                title: "Gadget".to_string(),
                qty: "1".to_string(),
                price: "25.00".to_string(),
            },
        ],
    };

    fill_templates(&invoice, &mut doc)?;

    println!("=== Filled document ===");
    println!("{}", doc.text());
    println!();
    println!("=== As JSON ===");
    println!("{}", doc.to_json()?);
    Ok(())
}
