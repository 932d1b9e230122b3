//! Printer catalog and printer command generation.
//!
//! Commands are produced as text only; delivering them to a device is up to the caller.
//! Thermal printers receive one ZPL document per printed copy and standard printers receive
//! an HTML fragment sized after the selected template.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{label::FoodLabelDto, template::LabelTemplateDto};

pub const MIN_COPIES: u32 = 1;
pub const MAX_COPIES: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PrinterKind {
    Thermal,
    Standard,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PrinterDto {
    pub id: String,
    pub name: String,
    pub kind: PrinterKind,
    pub paper_width_mm: u32,
}

/// Printers the kitchen can send labels to
pub fn printers() -> Vec<PrinterDto> {
    [
        ("zebra_zt230", "Zebra ZT230", PrinterKind::Thermal, 80),
        ("brother_ql820nwb", "Brother QL-820NWB", PrinterKind::Thermal, 62),
        ("standard_printer", "Standard printer", PrinterKind::Standard, 210),
    ]
    .into_iter()
    .map(|(id, name, kind, paper_width_mm)| PrinterDto {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        paper_width_mm,
    })
    .collect()
}

pub fn find_printer(printer_id: &str) -> Option<PrinterDto> {
    printers().into_iter().find(|p| p.id == printer_id)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PrintRequestDto {
    pub label_ids: Vec<Uuid>,
    pub printer_id: String,
    pub copies: u32,
    /// Defaults to the standard template
    #[serde(default)]
    pub template_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PrintJobDto {
    pub printer: PrinterDto,
    pub copies: u32,
    pub label_count: usize,
    /// Number of labels printed, `label_count * copies`
    pub total: usize,
    /// One command per printed label, in print order
    pub commands: Vec<String>,
}

/// Formats a timestamp the way it is printed on labels, e.g. `18/10/2026, 14:30:00`
pub fn format_label_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// Removes ZPL control characters from a field value
fn zpl_field(value: &str) -> String {
    value.chars().filter(|c| *c != '^' && *c != '~').collect()
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Builds the ZPL document of a label
pub fn zpl_command(label: &FoodLabelDto) -> String {
    let mut lines = vec![
        "^XA".to_string(),
        format!("^FO50,30^A0N,30,30^FD{}^FS", zpl_field(&label.product_name)),
        format!(
            "^FO50,80^A0N,20,20^FDPRODUCAO: {}^FS",
            format_label_timestamp(label.production_date)
        ),
        format!(
            "^FO50,110^A0N,20,20^FDVALIDADE: {}^FS",
            format_label_timestamp(label.expiration_date)
        ),
        format!("^FO50,140^A0N,20,20^FDQTDE: {}^FS", zpl_field(&label.quantity)),
    ];

    if let Some(responsible) = non_empty(&label.responsible) {
        lines.push(format!(
            "^FO50,170^A0N,20,20^FDRESP: {}^FS",
            zpl_field(responsible)
        ));
    }
    if let Some(observations) = non_empty(&label.observations) {
        lines.push(format!("^FO50,200^A0N,15,15^FD{}^FS", zpl_field(observations)));
    }

    lines.push("^XZ".to_string());
    lines.join("\n")
}

/// Builds the HTML fragment of a label sized after `template`
pub fn html_command(label: &FoodLabelDto, template: &LabelTemplateDto) -> String {
    let mut details = vec![
        format!(
            "<div><strong>PRODUCAO:</strong> {}</div>",
            format_label_timestamp(label.production_date)
        ),
        format!(
            "<div><strong>VALIDADE:</strong> {}</div>",
            format_label_timestamp(label.expiration_date)
        ),
        format!(
            "<div><strong>QTDE:</strong> {}</div>",
            escape_html(&label.quantity)
        ),
    ];
    if let Some(responsible) = non_empty(&label.responsible) {
        details.push(format!(
            "<div><strong>RESP:</strong> {}</div>",
            escape_html(responsible)
        ));
    }
    if let Some(observations) = non_empty(&label.observations) {
        details.push(format!(
            "<div><strong>OBS:</strong> {}</div>",
            escape_html(observations)
        ));
    }

    format!(
        "<div class=\"label\" style=\"width:{}mm;height:{}mm;background:{};color:{};border:2px solid {};padding:4mm;font-family:Arial,sans-serif\">\
         <div style=\"font-size:{}pt;font-weight:bold\">{}</div>\
         <div style=\"font-size:{}pt\">{}</div>\
         </div>",
        template.width,
        template.height,
        template.colors.background,
        template.colors.text,
        template.colors.accent,
        template.font_size.product,
        escape_html(&label.product_name),
        template.font_size.details,
        details.join("")
    )
}

/// Builds every command of a print job, repeating each label `copies` times in a row.
pub fn build_print_commands(
    labels: &[FoodLabelDto],
    printer: &PrinterDto,
    copies: u32,
    template: &LabelTemplateDto,
) -> Vec<String> {
    let mut commands = Vec::with_capacity(labels.len() * copies as usize);

    for label in labels {
        let command = match printer.kind {
            PrinterKind::Thermal => zpl_command(label),
            PrinterKind::Standard => html_command(label, template),
        };
        for _ in 0..copies {
            commands.push(command.clone());
        }
    }

    commands
}
