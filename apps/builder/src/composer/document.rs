//! Renders a complete resume document from a [`FormData`] record.
//!
//! The composer is total: every input, including the all-empty record,
//! produces a well-formed document. Missing data degrades to placeholder
//! text or omitted sections, never to an error. Section gates test trimmed
//! emptiness; section content renders the field verbatim.
//!
//! Output is a single self-contained HTML string with inline styles only,
//! sized for A4 print. Nothing non-deterministic is embedded; timestamps
//! exist only in export file names, never in the document.

use crate::composer::numeric::parse_years;
use crate::models::FormData;

// Placeholder copy used when optional fields are blank.
const NAME_PLACEHOLDER: &str = "YOUR NAME";
const TITLE_PLACEHOLDER: &str = "Professional Title";
const COMPANY_PLACEHOLDER: &str = "Company Name";
const POSITION_PLACEHOLDER: &str = "Position Title";
const INDUSTRY_FALLBACK: &str = "the industry";

const EDUCATION_YEARS: &str = "2020-2024";
const EDUCATION_POSITION: &str = "Degree Program";
const PRIMARY_DATE_FALLBACK: &str = "2023 - Present";

// The synthetic prior-role entry is fabricated content, not a data echo.
// It appears only when experience parses to an integer strictly greater
// than this threshold.
const SYNTHETIC_YEARS_THRESHOLD: i64 = 2;
const SYNTHETIC_COMPANY: &str = "Previous Company";
const SYNTHETIC_DATES: &str = "2020 - 2023";
const SYNTHETIC_POSITION_FALLBACK: &str = "Position";
const SYNTHETIC_BODY: &str = "Gained foundational experience and developed key skills in the \
     field. Collaborated with senior team members on various projects.";

const GENERIC_DUTIES: &str = "Responsible for various professional duties including project \
     management, team collaboration, and delivering high-quality results in a fast-paced \
     environment.";

/// Fixed inline stylesheet. A4 container (210mm × 297mm, 20mm padding),
/// print color adjustment, three-column skills grid.
const STYLES: &str = r#"    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }

    body {
      font-family: 'Arial', sans-serif;
      background: #ffffff;
      color: #2D3748;
      line-height: 1.6;
    }

    .container {
      width: 210mm;
      min-height: 297mm;
      padding: 20mm;
      margin: 0 auto;
      background: white;
    }

    .header {
      text-align: center;
      margin-bottom: 30px;
      padding-bottom: 20px;
    }

    .name {
      font-size: 42px;
      font-weight: bold;
      color: #2D3748;
      letter-spacing: 3px;
      text-transform: uppercase;
      margin-bottom: 8px;
    }

    .job-title {
      font-size: 18px;
      color: #4A5568;
      margin-bottom: 15px;
    }

    .contact-row {
      display: flex;
      justify-content: center;
      flex-wrap: wrap;
      gap: 20px;
      margin-top: 15px;
    }

    .contact-item {
      display: flex;
      align-items: center;
      gap: 6px;
      font-size: 13px;
      color: #4A5568;
    }

    .icon {
      font-size: 14px;
    }

    .divider {
      height: 1px;
      background: #CBD5E0;
      margin: 25px 0;
    }

    .section {
      margin-bottom: 25px;
    }

    .section-title {
      font-size: 16px;
      font-weight: bold;
      color: #2D3748;
      letter-spacing: 2px;
      text-transform: uppercase;
      margin-bottom: 15px;
      border-bottom: 2px solid #2D3748;
      padding-bottom: 5px;
    }

    .body-text {
      font-size: 13px;
      color: #4A5568;
      line-height: 1.8;
      text-align: justify;
    }

    .experience-item {
      margin-bottom: 20px;
    }

    .experience-header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      margin-bottom: 8px;
    }

    .institution {
      font-size: 14px;
      color: #2D3748;
      font-weight: 600;
    }

    .year {
      font-size: 13px;
      color: #718096;
      font-style: italic;
    }

    .position {
      font-size: 14px;
      font-weight: bold;
      color: #2D3748;
      margin-bottom: 8px;
    }

    .skills-grid {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 12px;
      margin-top: 10px;
    }

    .skill-item {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .bullet {
      font-size: 16px;
      color: #2D3748;
      font-weight: bold;
    }

    .skill-text {
      font-size: 13px;
      color: #4A5568;
    }

    .footer {
      position: fixed;
      bottom: 0;
      left: 0;
      right: 0;
      height: 30px;
      background: #4A5568;
    }

    @media print {
      .container {
        margin: 0;
        padding: 15mm;
      }

      body {
        -webkit-print-color-adjust: exact;
        print-color-adjust: exact;
      }
    }
"#;

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if blank(value) {
        placeholder
    } else {
        value
    }
}

/// Composes the full resume document. Pure and deterministic: calling twice
/// with identical input yields byte-identical output.
pub fn compose(form: &FormData) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!(
        "  <title>Resume - {}</title>\n",
        or_placeholder(&form.full_name, "Resume")
    ));
    html.push_str("  <style>\n");
    html.push_str(STYLES);
    html.push_str("  </style>\n</head>\n<body>\n  <div class=\"container\">\n");

    push_header(&mut html, form);
    push_divider(&mut html);

    if !blank(&form.summary) {
        push_about(&mut html, form);
        push_divider(&mut html);
    }

    if !blank(&form.education_level) {
        push_education(&mut html, form);
        push_divider(&mut html);
    }

    if !blank(&form.employer) || !blank(&form.experience) {
        push_experience(&mut html, form);
        push_divider(&mut html);
    }

    if !form.skills.is_empty() {
        push_skills(&mut html, form);
    }

    html.push_str("    <div class=\"footer\"></div>\n");
    html.push_str("  </div>\n</body>\n</html>\n");
    html
}

fn push_divider(html: &mut String) {
    html.push_str("    <div class=\"divider\"></div>\n");
}

fn push_header(html: &mut String, form: &FormData) {
    html.push_str("    <div class=\"header\">\n");
    html.push_str(&format!(
        "      <h1 class=\"name\">{}</h1>\n",
        or_placeholder(&form.full_name, NAME_PLACEHOLDER)
    ));
    html.push_str(&format!(
        "      <p class=\"job-title\">{}</p>\n",
        or_placeholder(&form.job_type, TITLE_PLACEHOLDER)
    ));
    html.push_str("      <div class=\"contact-row\">\n");
    // Each contact item is omitted individually when its field is blank.
    for (icon, value) in [
        ("\u{1F4DE}", &form.phone),
        ("\u{2709}", &form.email),
        ("\u{1F4CD}", &form.location),
    ] {
        if !blank(value) {
            html.push_str(&format!(
                "        <div class=\"contact-item\">\n          <span class=\"icon\">{icon}</span>\n          <span>{value}</span>\n        </div>\n"
            ));
        }
    }
    html.push_str("      </div>\n    </div>\n");
}

fn push_about(html: &mut String, form: &FormData) {
    html.push_str("    <div class=\"section\">\n");
    html.push_str("      <h2 class=\"section-title\">ABOUT ME</h2>\n");
    html.push_str(&format!(
        "      <p class=\"body-text\">{}</p>\n",
        form.summary
    ));
    html.push_str("    </div>\n");
}

fn push_education(html: &mut String, form: &FormData) {
    html.push_str("    <div class=\"section\">\n");
    html.push_str("      <h2 class=\"section-title\">EDUCATION</h2>\n");
    html.push_str("      <div class=\"experience-item\">\n");
    html.push_str(&format!(
        "        <div class=\"experience-header\">\n          <span class=\"institution\">{}</span>\n          <span class=\"year\">{}</span>\n        </div>\n",
        form.education_level, EDUCATION_YEARS
    ));
    html.push_str(&format!(
        "        <p class=\"position\">{EDUCATION_POSITION}</p>\n"
    ));
    html.push_str(&format!(
        "        <p class=\"body-text\">Completed {} with focus on professional development and practical skills applicable to {}.</p>\n",
        form.education_level,
        or_placeholder(&form.job_type, INDUSTRY_FALLBACK)
    ));
    html.push_str("      </div>\n    </div>\n");
}

fn push_experience(html: &mut String, form: &FormData) {
    html.push_str("    <div class=\"section\">\n");
    html.push_str("      <h2 class=\"section-title\">WORK EXPERIENCE</h2>\n");

    // Primary entry, sourced from user input with placeholder fallbacks.
    let duration = if blank(&form.experience) {
        PRIMARY_DATE_FALLBACK.to_string()
    } else {
        format!("{} years experience", form.experience)
    };
    push_experience_entry(
        html,
        or_placeholder(&form.employer, COMPANY_PLACEHOLDER),
        &duration,
        or_placeholder(&form.job_type, POSITION_PLACEHOLDER),
        or_placeholder(&form.summary, GENERIC_DUTIES),
    );

    // Synthetic prior-role entry, gated strictly on parsed years > threshold.
    if parse_years(&form.experience).is_some_and(|n| n > SYNTHETIC_YEARS_THRESHOLD) {
        let position = format!(
            "Junior {}",
            or_placeholder(&form.job_type, SYNTHETIC_POSITION_FALLBACK)
        );
        push_experience_entry(
            html,
            SYNTHETIC_COMPANY,
            SYNTHETIC_DATES,
            &position,
            SYNTHETIC_BODY,
        );
    }

    html.push_str("    </div>\n");
}

fn push_experience_entry(
    html: &mut String,
    institution: &str,
    duration: &str,
    position: &str,
    body: &str,
) {
    html.push_str("      <div class=\"experience-item\">\n");
    html.push_str(&format!(
        "        <div class=\"experience-header\">\n          <span class=\"institution\">{institution}</span>\n          <span class=\"year\">{duration}</span>\n        </div>\n"
    ));
    html.push_str(&format!("        <p class=\"position\">{position}</p>\n"));
    html.push_str(&format!("        <p class=\"body-text\">{body}</p>\n"));
    html.push_str("      </div>\n");
}

fn push_skills(html: &mut String, form: &FormData) {
    html.push_str("    <div class=\"section\">\n");
    html.push_str("      <h2 class=\"section-title\">SKILLS</h2>\n");
    html.push_str("      <div class=\"skills-grid\">\n");
    for skill in &form.skills {
        html.push_str(&format!(
            "        <div class=\"skill-item\">\n          <span class=\"bullet\">\u{2022}</span>\n          <span class=\"skill-text\">{skill}</span>\n        </div>\n"
        ));
    }
    html.push_str("      </div>\n    </div>\n");
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
