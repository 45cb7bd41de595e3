//! HTML rendering of a quotation.
//!
//! Produces a self-contained document (inline CSS, remote images) ready to be
//! printed by the PDF engine.

use chrono::{Local, NaiveDate};

use super::models::{Quotation, QuotationLine};
use super::totals::{format_minor, QuotationTotals};
use crate::config::QuotationSettings;

const STYLESHEET: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/quotation.css"));

/// Escape text for HTML element content and attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Date printed when the request carries none, e.g. "13/02/2025".
pub fn format_quotation_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn render_quotation_html(
    quotation: &Quotation,
    totals: &QuotationTotals,
    settings: &QuotationSettings,
) -> String {
    let date = quotation
        .date
        .clone()
        .unwrap_or_else(|| format_quotation_date(Local::now().date_naive()));

    let number = quotation
        .quotation_number
        .as_deref()
        .map(|n| {
            format!(
                r#"    <p class="blue_font italic">
      <strong>No. </strong>
      <span class="quotation-number">{}</span>
    </p>
"#,
                escape_html(n)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Quotation</title>
  <style>
{style}
  </style>
</head>
<body>
  <div class="quotation-container">
    <div class="quotation-header">
      <div class="quotation_head">
        <h6 class="ar">عرض سعر</h6>
        <h6>QUOTATION</h6>
      </div>
      <div class="logo_flex">
        <img src="{logo}" alt="Company Logo" />
        <div>
          <h5 class="arabic">مؤسسة التوريد والتموين الدولية للتجارة</h5>
          <h5>INTERNATIONAL SUPPLY CORPORATION</h5>
        </div>
      </div>
    </div>
{number}    <p class="blue_font pt-10" style="margin-bottom: 0">
      Date: <span style="color: black">{date}</span>
    </p>
    <div class="company-row">
      <p class="blue_font">Company Name:</p>
      <p class="compny_name"><span class="cmpny_span">{company}</span></p>
    </div>
    <table class="quotation-table">
      <thead>
        <tr>
          <th>رقم <br />No.</th>
          <th style="text-align: center">Description الــــوصــــف</th>
          <th>Img</th>
          <th>الکمیة <br />Quantity</th>
          <th>السعر الوحدة<br />Unit Price</th>
          <th>قیمة الإجمالي<br />Total Price</th>
        </tr>
      </thead>
      <tbody>
{rows}      </tbody>
      <tfoot>
{footer}      </tfoot>
    </table>
{closing}  </div>
</body>
</html>
"#,
        style = STYLESHEET,
        logo = escape_html(&settings.logo_url),
        number = number,
        date = escape_html(&date),
        company = escape_html(&quotation.company_name),
        rows = render_rows(&quotation.lines),
        footer = render_totals(totals),
        closing = render_closing(settings),
    )
}

fn render_rows(lines: &[QuotationLine]) -> String {
    let mut rows = String::new();
    for (index, line) in lines.iter().enumerate() {
        rows.push_str(&render_row(Some(index + 1), line));
        for sub in &line.sub_lines {
            rows.push_str(&render_row(None, sub));
        }
    }
    rows
}

fn render_row(index: Option<usize>, line: &QuotationLine) -> String {
    // overflowing rows are rejected when totals are computed
    let total = line
        .line_total()
        .map(|t| t.to_string())
        .unwrap_or_default();

    format!(
        r#"        <tr>
          <td>{}</td>
          <td>{}</td>
          <td></td>
          <td>{}</td>
          <td>{}</td>
          <td>{}</td>
        </tr>
"#,
        index.map(|i| i.to_string()).unwrap_or_default(),
        escape_html(&line.name),
        line.quantity,
        line.unit_price,
        total,
    )
}

fn render_totals(totals: &QuotationTotals) -> String {
    format!(
        r#"        <tr>
          <td colspan="3" class="total"><span>{subtotal_words} Saudi Riyals, before VAT {subtotal}</span></td>
          <td colspan="2" class="bg-blue">المجموع</td>
          <td>{subtotal}</td>
        </tr>
        <tr>
          <td colspan="3" class="total"><span>+{pct}% VAT on total amount</span></td>
          <td colspan="2" class="bg-blue">ضريبة قيمة مضافة</td>
          <td>{vat}</td>
        </tr>
        <tr>
          <td colspan="3" class="total"><span>{final_words} SR, ({pct}% VAT Inclusive)</span></td>
          <td colspan="2" class="bg-blue bg-blue-last">جمالي</td>
          <td>{final_amount}</td>
        </tr>
"#,
        subtotal_words = totals.subtotal_words,
        subtotal = totals.subtotal,
        pct = totals.vat_percent,
        vat = format_minor(totals.vat_minor),
        final_words = totals.final_words,
        final_amount = format_minor(totals.final_minor),
    )
}

fn render_closing(settings: &QuotationSettings) -> String {
    format!(
        r#"    <div class="footer">
      <div class="seal_flex">
        <div class="content">
          <p>Terms &amp; Conditions :</p>
          <ul>
            <li>Payment method 50% advance &amp; rest after completion</li>
            <li>Delivery : 1 week, also depends on the order requirements</li>
          </ul>
          <p style="margin-bottom: 0px; padding-top: 10px">We look forward to hear from you soon,</p>
          <p style="margin-top: 0px">Thanks &amp; Regards</p>
        </div>
        <div class="seal">
          <p style="margin-top: 0px; text-align: left">Stamp &amp; Signature</p>
          <div class="seal_box">
            <img src="{seal}" alt="Company Seal" />
          </div>
        </div>
      </div>
      <div class="bottom_div">
        <div>
          <p>Kingdom of Saudi Arabia - Riyadh - P.O.Box 8199 - Post Code: 13252</p>
          <p>Tel.: +966 11 2098112 - Mobile: +966 553559551 - C.R.: 1010588769</p>
        </div>
        <div>
          <p>المـمـلـكـة الـعـربـيـة الـسـعـوديـة - الـــريـــاض - ص.ب ٨١٩٩ - الـــرمـــز الــبــريــدي ١٣٢٥٢</p>
          <p>هاتف: ٢٠٩٨١١٢ ١١ +٩٦٦ - جوال: ٥٥٣٥٥٩٥٥١ +٩٦٦ - سجل تجاري: ١</p>
        </div>
      </div>
    </div>
"#,
        seal = escape_html(&settings.seal_url),
    )
}
