//! Benchmarks for sheetlens extraction and analysis performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sheetlens::{benford_projection, grid::project, grid::SheetReader, AnalysisOptions};
use std::io::{Cursor, Write};

/// Creates a synthetic workbook with the given number of data rows.
fn create_test_workbook(row_count: usize) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    zip.start_file("xl/sharedStrings.xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <si><t>posted</t></si>
  <si><t>amount</t></si>
  <si><t>memo</t></si>
  <si><t>recurring charge</t></si>
</sst>"#,
    )
    .unwrap();

    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<sheetData>
<row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1" t="s"><v>1</v></c><c r="C1" t="s"><v>2</v></c></row>"#,
    );

    for i in 0..row_count {
        let row = i + 2;
        // Deterministic spread of magnitudes and days
        let amount = ((i * 37 + 11) % 9000) as f64 + 0.25;
        content.push_str(&format!(
            r#"
<row r="{row}"><c r="A{row}"><v>2024-{:02}-{:02}</v></c><c r="B{row}"><v>{amount}</v></c><c r="C{row}" t="s"><v>3</v></c></row>"#,
            (i % 12) + 1,
            (i % 28) + 1,
        ));
    }

    content.push_str("\n</sheetData>\n</worksheet>");

    zip.start_file("xl/worksheets/sheet1.xml", options).unwrap();
    zip.write_all(content.as_bytes()).unwrap();
    zip.finish().unwrap();

    buffer
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [100, 1_000, 10_000] {
        let data = create_test_workbook(size);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let reader = SheetReader::from_bytes(black_box(data.clone())).unwrap();
                let grid = reader.read_grid("xl/worksheets/sheet1.xml").unwrap();
                black_box(project(&grid).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_benford(c: &mut Criterion) {
    let mut group = c.benchmark_group("benford");

    for size in [1_000, 10_000] {
        let data = create_test_workbook(size);
        let reader = SheetReader::from_bytes(data).unwrap();
        let grid = reader.read_grid("xl/worksheets/sheet1.xml").unwrap();
        let projection = project(&grid).unwrap();
        let options = AnalysisOptions::default();

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &projection,
            |b, projection| {
                b.iter(|| {
                    black_box(
                        benford_projection("bench.xlsx", black_box(projection), &options).unwrap(),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_benford);
criterion_main!(benches);
