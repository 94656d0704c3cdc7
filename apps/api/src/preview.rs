//! Renders a resume document as Markdown for preview.

use crate::models::resume::ResumeDocument;

/// Renders the document in display order: header, summary, experience,
/// education, skills. Sections are always emitted, even when empty.
pub fn render_resume_md(doc: &ResumeDocument) -> String {
    let info = &doc.personal_info;
    let mut md = format!("# {}\n\n", info.full_name);
    md.push_str(&format!("{}  \n", info.email));
    md.push_str(&format!("{} | {}\n\n", info.phone, info.location));

    md.push_str("## Professional Summary\n\n");
    md.push_str(&info.summary);
    md.push_str("\n\n");

    md.push_str("## Professional Experience\n\n");
    for exp in &doc.experience {
        md.push_str(&format!("### {}\n", exp.company));
        md.push_str(&format!("*{}*  \n", exp.position));
        md.push_str(&format!(
            "{} - {} | {}\n\n",
            exp.start_date, exp.end_date, exp.location
        ));
        for point in &exp.description {
            md.push_str(&format!("- {point}\n"));
        }
        md.push('\n');
    }

    md.push_str("## Education\n\n");
    for edu in &doc.education {
        md.push_str(&format!("### {}\n", edu.school));
        md.push_str(&format!("*{} in {}*  \n", edu.degree, edu.field));
        md.push_str(&format!("{} - {}\n\n", edu.start_date, edu.end_date));
    }

    md.push_str("## Skills\n\n");
    if !doc.skills.is_empty() {
        md.push_str(&doc.skills.join(" · "));
        md.push('\n');
    }
    md
}
