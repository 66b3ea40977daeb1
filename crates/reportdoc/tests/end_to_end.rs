use reportdoc::{
    compile_markdown, compile_report, AnalysisReport, Block, Document, HeadingLevel, ReportInput,
    ReportOptions, ReportService, ReportTemplate, Run,
};

/// Position of the first block whose text equals `text`
fn position_of(blocks: &[Block], text: &str) -> usize {
    blocks
        .iter()
        .position(|b| b.text() == text)
        .unwrap_or_else(|| panic!("no block with text {text:?}"))
}

#[test]
fn test_summary_and_short_term_plan() {
    let report: AnalysisReport = serde_json::from_str(
        r#"{"summary": {"currentAverage": 2.5}, "plan": {"shortTerm": ["Patch systems"]}}"#,
    )
    .unwrap();
    let template = ReportTemplate::default();
    let doc = compile_report(&report);
    let blocks = doc.blocks();

    let summary = position_of(blocks, &template.summary_heading);
    let current = position_of(blocks, "Puntaje promedio actual: 2.50");
    assert!(current > summary);
    assert!(matches!(blocks[current], Block::Paragraph { .. }));
    assert_eq!(blocks[current + 1].text(), "Puntaje objetivo: -");
    assert_eq!(blocks[current + 2].text(), "Brecha de madurez: -");

    let short_term = position_of(blocks, &template.short_term_heading);
    assert_eq!(
        blocks[short_term + 1],
        Block::BulletItem {
            level: 0,
            runs: vec![Run::plain("Patch systems")],
        }
    );
    assert_eq!(
        blocks[short_term + 2].text(),
        template.mid_term_heading,
        "only one bullet under the short-term heading"
    );
}

#[test]
fn test_spanish_payload_through_the_boundary() {
    let body = r#"{
        "resumen": {"promedio_actual": 1.75, "promedio_objetivo": 3, "brecha": 1.25},
        "justificacion": {
            "fortalezas": ["Inventario de activos"],
            "debilidades": ["Sin MFA", "Parches tardíos"],
            "implicancias": []
        },
        "plan": {"corto_plazo": ["Activar MFA"], "largo_plazo": ["Crear un SOC"]}
    }"#;

    let service = ReportService::new();
    let input = ReportInput::from_payload("application/json", body.as_bytes()).unwrap();
    let doc = service.compile(&input);

    assert_eq!(doc.title(), Some(ReportTemplate::default().title.as_str()));
    assert!(doc.iter().any(|b| b.text() == "Puntaje objetivo: 3.00"));
    assert!(doc.iter().any(|b| b.text() == "Brecha de madurez: 1.25"));
    assert_eq!(doc.bullet_count(), 5);
    assert_eq!(doc.heading_count(HeadingLevel::H1), 3);
    assert_eq!(doc.heading_count(HeadingLevel::H2), 6);
}

#[test]
fn test_english_template_skeleton() {
    let options = ReportOptions {
        template: ReportTemplate::english(),
        ..Default::default()
    };
    let service = ReportService::with_options(options);
    let doc = service.compile_report(&AnalysisReport::default());

    let h1: Vec<String> = doc
        .iter()
        .filter(|b| matches!(b, Block::Heading { level: HeadingLevel::H1, .. }))
        .map(Block::text)
        .collect();
    assert_eq!(h1, vec!["Summary", "Justification", "Plan"]);

    let strengths = position_of(doc.blocks(), "Strengths");
    assert_eq!(doc.blocks()[strengths + 1].text(), "Weaknesses");
    assert_eq!(doc.bullet_count(), 0);
}

#[test]
fn test_markdown_report_mirrors_line_order() {
    let text = "Intro libre\n\n## Estado de Madurez\n# Resumen\nPuntaje **bajo**\n\n## Plan\n- Activar MFA\n* Revisar accesos\n• Capacitar";
    let doc = compile_markdown(text);
    let blocks = doc.blocks();

    assert_eq!(blocks.len(), 10);
    assert!(matches!(blocks[0], Block::Paragraph { .. }));
    assert_eq!(blocks[1], Block::Blank);
    assert_eq!(
        blocks[2],
        Block::Title {
            text: "Estado de Madurez".to_string()
        }
    );
    assert_eq!(
        blocks[6],
        Block::Heading {
            text: "Plan".to_string(),
            level: HeadingLevel::H2,
        }
    );
    assert_eq!(doc.bullet_count(), 3);
}

#[test]
fn test_markdown_preview_recompiles_to_same_blocks() {
    let service = ReportService::new();
    let report: AnalysisReport = serde_json::from_str(
        r#"{"justificacion": {"fortalezas": ["**Buen** inventario"]}, "plan": {"mediano_plazo": ["SIEM"]}}"#,
    )
    .unwrap();

    let structured = service.compile_report(&report);
    let preview = service.render_markdown(&structured);
    let recompiled = service.compile_markdown(&preview);

    assert_eq!(recompiled, structured);
}

#[test]
fn test_trailing_blank_lines_survive_preview() {
    let service = ReportService::new();
    let source = service.compile_markdown("## T\nbody\n\n\n");
    assert_eq!(source.blocks().last(), Some(&Block::Blank));

    let preview = service.render_markdown(&source);
    assert_eq!(service.compile_markdown(&preview), source);

    let blank_only = Document::from(vec![Block::Blank]);
    let blank_only = service.compile_markdown(&service.render_markdown(&blank_only));
    assert_eq!(blank_only.blocks(), &[Block::Blank]);
}

#[cfg(feature = "docx")]
#[test]
fn test_export_markdown_to_docx() {
    let service = ReportService::new();
    let input = ReportInput::from_payload("text/markdown", "## T\n- a".as_bytes()).unwrap();
    let artifact = service.export(&input, Some("salida.docx")).unwrap();

    assert_eq!(artifact.filename, "salida.docx");
    assert!(artifact.bytes.starts_with(b"PK"));
}
