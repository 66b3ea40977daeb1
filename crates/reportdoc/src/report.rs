//! Structured report compiler.
//!
//! Lays an [`AnalysisReport`] out on the fixed template: title, summary,
//! justification, plan. Headings are always emitted; only the bullet bodies
//! depend on the input.

use log::debug;
use reportdoc_core::{Block, Document, HeadingLevel};

use crate::analysis::{format_score, AnalysisReport, Justification, Plan, Summary};
use crate::builder::{bullet_list, heading, paragraph, title};
use crate::template::ReportTemplate;

/// Compile a report with the given labels
pub fn compile_report_with(report: &AnalysisReport, template: &ReportTemplate) -> Document {
    let mut blocks = vec![title(&template.title)];
    push_summary(&mut blocks, report.summary.as_ref(), template);
    push_justification(&mut blocks, report.justification.as_ref(), template);
    push_plan(&mut blocks, report.plan.as_ref(), template);

    let document = Document::new(blocks);
    debug!(
        "compiled report: {} blocks, {} bullets",
        document.len(),
        document.bullet_count()
    );
    document
}

fn push_summary(blocks: &mut Vec<Block>, summary: Option<&Summary>, template: &ReportTemplate) {
    blocks.push(heading(&template.summary_heading, HeadingLevel::H1));

    let lines = [
        (
            &template.current_average_label,
            summary.and_then(|s| s.current_average.as_ref()),
        ),
        (
            &template.target_average_label,
            summary.and_then(|s| s.target_average.as_ref()),
        ),
        (&template.gap_label, summary.and_then(|s| s.gap.as_ref())),
    ];
    for (label, score) in lines {
        let value = format_score(score, &template.placeholder);
        blocks.push(paragraph(&format!("{label}{value}")));
    }
}

fn push_justification(
    blocks: &mut Vec<Block>,
    justification: Option<&Justification>,
    template: &ReportTemplate,
) {
    blocks.push(heading(&template.justification_heading, HeadingLevel::H1));
    push_section(
        blocks,
        &template.strengths_heading,
        justification.and_then(|j| j.strengths.as_deref()),
    );
    push_section(
        blocks,
        &template.weaknesses_heading,
        justification.and_then(|j| j.weaknesses.as_deref()),
    );
    push_section(
        blocks,
        &template.implications_heading,
        justification.and_then(|j| j.implications.as_deref()),
    );
}

fn push_plan(blocks: &mut Vec<Block>, plan: Option<&Plan>, template: &ReportTemplate) {
    blocks.push(heading(&template.plan_heading, HeadingLevel::H1));
    push_section(
        blocks,
        &template.short_term_heading,
        plan.and_then(|p| p.short_term.as_deref()),
    );
    push_section(
        blocks,
        &template.mid_term_heading,
        plan.and_then(|p| p.mid_term.as_deref()),
    );
    push_section(
        blocks,
        &template.long_term_heading,
        plan.and_then(|p| p.long_term.as_deref()),
    );
}

fn push_section(blocks: &mut Vec<Block>, label: &str, items: Option<&[String]>) {
    blocks.push(heading(label, HeadingLevel::H2));
    blocks.extend(bullet_list(items, 0));
}
