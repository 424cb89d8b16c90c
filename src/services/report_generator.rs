use printpdf::*;
use std::fs::File;
use std::io::BufWriter;
use uuid::Uuid;

use crate::trip::TripPlan;

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const TOP_Y: f64 = 270.0;
const BOTTOM_Y: f64 = 25.0;
const WRAP_WIDTH: usize = 90;

pub async fn generate_pdf_report(plan: &TripPlan) -> std::io::Result<String> {
    let dir = "public/reports";
    tokio::fs::create_dir_all(dir).await?;

    let report_id = Uuid::new_v4().to_string();
    let file_path = format!("{}/{}.pdf", dir, report_id);
    let relative_path = format!("/reports/{}.pdf", report_id);

    // Clone the plan to move into the blocking thread
    let plan = plan.clone();

    // Run PDF generation in a blocking task (CPU intensive)
    tokio::task::spawn_blocking(move || render_plan(&plan, &report_id, &file_path))
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))??;

    Ok(relative_path)
}

fn render_plan(plan: &TripPlan, report_id: &str, file_path: &str) -> std::io::Result<()> {
    let (doc, page1, layer1) = PdfDocument::new(
        format!("Travel Genie - {}", plan.destination),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );

    // Use built-in fonts (no external file needed)
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let mut page = PageWriter::new(&doc, doc.get_page(page1).get_layer(layer1));

    page.line(
        &format!("Your Trip to {}", plan.destination),
        22.0,
        20.0,
        &font_bold,
    );
    page.gap(8.0);

    let summary = [
        ("From", plan.origin.as_str()),
        ("Duration", plan.duration.as_str()),
        ("Total Cost", plan.total_cost.as_str()),
        ("Daily Budget", plan.daily_budget.as_str()),
    ];
    for (label, value) in summary {
        if !value.is_empty() {
            page.pair(label, value, &font_bold, &font);
        }
    }
    page.gap(4.0);

    page.heading("Transportation Options", &font_bold);
    for option in &plan.transport {
        page.line(
            &format!("{} - {}", option.kind, option.name),
            12.0,
            20.0,
            &font_bold,
        );
        page.line(
            &format!("{} | {}", option.cost, option.duration),
            11.0,
            25.0,
            &font,
        );
        for line in wrap_text(&option.analysis, WRAP_WIDTH) {
            page.line(&line, 10.0, 25.0, &font);
        }
        if let Some(url) = &option.booking_url {
            page.line(&format!("Book: {}", url), 10.0, 25.0, &font);
        }
        page.gap(3.0);
    }

    page.heading("Accommodation", &font_bold);
    page.pair("Name", &plan.accommodation.name, &font_bold, &font);
    page.pair("Cost", &plan.accommodation.cost, &font_bold, &font);
    page.pair("Total", &plan.accommodation.total, &font_bold, &font);
    if let Some(url) = &plan.accommodation.booking_url {
        page.pair("Book", url, &font_bold, &font);
    }
    page.gap(4.0);

    if !plan.recommendation.is_empty() {
        page.heading("Recommendation", &font_bold);
        for line in wrap_text(&plan.recommendation, WRAP_WIDTH) {
            page.line(&line, 11.0, 20.0, &font);
        }
        page.gap(4.0);
    }

    if !plan.itinerary.is_empty() {
        page.heading("Daily Itinerary", &font_bold);
        for day in &plan.itinerary {
            page.line(&format!("Day {}", day.day), 12.0, 20.0, &font_bold);
            for line in wrap_text(&day.activities, WRAP_WIDTH) {
                page.line(&line, 10.0, 25.0, &font);
            }
            page.gap(2.0);
        }
    }

    let lists = [
        ("Packing List", &plan.packing_list),
        ("Safety Tips", &plan.safety_tips),
        ("Pre-Trip Checklist", &plan.checklist),
    ];
    for (title, items) in lists {
        if items.is_empty() {
            continue;
        }
        page.heading(title, &font_bold);
        for item in items {
            for line in wrap_text(&format!("- {}", item), WRAP_WIDTH) {
                page.line(&line, 20.0, 25.0, &font);
            }
        }
        page.gap(4.0);
    }

    // Footer on whatever page we ended on
    page.layer.use_text(
        format!("Report ID: {}", report_id),
        9.0,
        Mm(20.0),
        Mm(12.0),
        &font,
    );

    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer).map_err(pdf_error)?;
    Ok(())
}

fn pdf_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}

/// Cursor over the document that starts a fresh page when a line would land
/// below the bottom margin.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f64,
}

impl<'a> PageWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: TOP_Y,
        }
    }

    fn break_page_if_needed(&mut self) {
        if self.y < BOTTOM_Y {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_Y;
        }
    }

    fn line(&mut self, text: &str, size: f64, x: f64, font: &IndirectFontRef) {
        self.break_page_if_needed();
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
        self.y -= 7.0;
    }

    fn pair(&mut self, label: &str, value: &str, bold: &IndirectFontRef, font: &IndirectFontRef) {
        self.break_page_if_needed();
        self.layer.use_text(label, 12.0, Mm(20.0), Mm(self.y), bold);
        self.layer.use_text(value, 12.0, Mm(70.0), Mm(self.y), font);
        self.y -= 10.0;
    }

    fn heading(&mut self, text: &str, bold: &IndirectFontRef) {
        self.break_page_if_needed();
        self.layer.use_text(text, 16.0, Mm(20.0), Mm(self.y), bold);
        self.y -= 12.0;
    }

    fn gap(&mut self, mm: f64) {
        self.y -= mm;
    }
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + word.len() + 1 > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
