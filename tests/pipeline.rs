use figart::core::decorator::visual_width;
use figart::{AppConfig, ArtGenerator, ArtResult, FontEngine};

/// 固定三行输出的字体引擎
struct BlockEngine;

impl FontEngine for BlockEngine {
    fn render(&self, text: &str, _font: &str) -> ArtResult<String> {
        Ok(format!("#{0}#\n# {0} #\n#{0}#", text))
    }
}

#[test]
fn single_box_scenario_from_catalog() {
    let config = AppConfig::builtin();
    let generator = ArtGenerator::new(BlockEngine);
    let (_, style) = config.style(2, 1).expect("single box");
    let art = generator.generate("Hi", style, None).expect("generate");
    assert_eq!(art, "┌────┐\n│ Hi │\n└────┘");
}

#[test]
fn bordered_styles_have_uniform_row_width() {
    let config = AppConfig::builtin();
    let generator = ArtGenerator::new(BlockEngine);

    for category in &config.categories {
        for style in &category.styles {
            let Some(decorator) = &style.decorator else {
                continue;
            };
            if !decorator.has_border() {
                continue;
            }

            let art = generator.generate("wave", style, None).expect("generate");
            let rows: Vec<&str> = art.split('\n').collect();
            let width = visual_width(rows[0]);
            for row in &rows {
                assert_eq!(visual_width(row), width, "{}: {:?}", style.name, row);
            }
        }
    }
}

#[test]
fn plain_style_returns_input_unchanged() {
    let config = AppConfig::builtin();
    let generator = ArtGenerator::new(BlockEngine);
    let (_, standard) = config.style(1, 1).expect("standard");
    let text = "multi\nline  \n\n input";
    assert_eq!(generator.generate(text, standard, None).expect("generate"), text);
}

#[test]
fn block_3d_shadows_every_line_but_the_last() {
    let config = AppConfig::builtin();
    let generator = ArtGenerator::new(BlockEngine);
    let (_, block) = config.style(3, 3).expect("block 3d");
    let art = generator.generate("ab", block, None).expect("generate");
    assert_eq!(art, "#ab#\n  ░░░░\n# ab #\n  ░ ░░ ░\n#ab#");
}
