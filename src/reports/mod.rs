use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use discomarkov::clips::DECLARATION_NAMES;
use discomarkov::model::{ModelSet, StatisticalModel};

fn gram_header(n: usize) -> String {
    DECLARATION_NAMES
        .get(n.wrapping_sub(1))
        .map(|name| format!("{}s", name))
        .unwrap_or_else(|| format!("{}-grams", n))
}

pub fn print_model_report(models: &ModelSet, window_sizes: &[usize]) {
    let mut rows: Vec<(&String, &StatisticalModel)> = models.iter().collect();
    rows.sort_by(|a, b| {
        b.1.total_tokens()
            .cmp(&a.1.total_tokens())
            .then_with(|| a.0.cmp(b.0))
    });

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("User").add_attribute(Attribute::Bold),
        Cell::new("Id"),
        Cell::new("Tokens").fg(Color::Cyan),
        Cell::new("Words"),
    ];
    for &n in window_sizes {
        header.push(Cell::new(gram_header(n)));
    }
    table.add_row(header);

    for i in 2..4 + window_sizes.len() {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (id, model) in rows {
        let mut row = vec![
            Cell::new(&model.name).add_attribute(Attribute::Bold),
            Cell::new(id),
            Cell::new(model.total_tokens()).fg(Color::Cyan),
            Cell::new(model.word_frequency.len()),
        ];
        for &n in window_sizes {
            let distinct = model.ngram(n).map(|g| g.grams.len()).unwrap_or(0);
            row.push(Cell::new(distinct));
        }
        table.add_row(row);
    }
    println!("\n{}", table);
}
