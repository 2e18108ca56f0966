//! 回放结果输出：对齐的文本表格或 JSON

use clap::ValueEnum;
use serde::Serialize;

use crate::scenario::{Playback, Row};

/// 输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// 渲染回放结果
pub fn render<T: Row + Serialize>(
    playback: &Playback<T>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(render_table(playback)),
        OutputFormat::Json => serde_json::to_string_pretty(playback),
    }
}

fn render_table<T: Row>(playback: &Playback<T>) -> String {
    let mut header = vec!["frame".to_string(), "ms".to_string()];
    header.extend(T::columns().into_iter().map(str::to_string));

    let rows: Vec<Vec<String>> = playback
        .frames
        .iter()
        .map(|f| {
            let mut row = vec![f.frame.to_string(), format!("{:.1}", f.time_ms)];
            row.extend(f.sample.cells());
            row
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            std::iter::once(&header)
                .chain(&rows)
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(&header));
    out.push('\n');
    for row in &rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    if !playback.settled {
        out.push_str("(未收敛：达到帧数上限)\n");
    }
    out
}
