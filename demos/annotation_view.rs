use std::env;
use std::fs::File;
use std::io::BufRead as _;
use std::io::BufReader;

use genomic_annotation::Annotation;
use genomic_annotation::algebra;
use genomic_annotation::annotation::factory::BedFactory;
use genomic_annotation::annotation::factory::Factory as _;
use genomic_annotation::core::Located as _;
use genomic_annotation::core::Orientable as _;
use tabled::builder::Builder;
use tabled::settings::Alignment;
use tabled::settings::Style;
use tabled::settings::object::Rows;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let src = env::args().nth(1).expect("missing src");
    let max_gap = env::args()
        .nth(2)
        .map(|s| {
            s.parse::<i64>()
                .unwrap_or_else(|_| panic!("could not parse max gap: {s}"))
        })
        .unwrap_or(0);

    let mut annotations = Vec::new();
    for result in BufReader::new(File::open(src)?).lines() {
        let line = result?;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        annotations.push(BedFactory.create_from_line(&line)?);
    }
    annotations.sort();

    let merged = algebra::merge_all_overlappers(&annotations);
    let stitched = algebra::stitch_list(annotations.clone(), max_gap);

    let mut builder = Builder::default();
    builder.push_record([
        "Record", "--", "--", "--", "-->", "Merged", "Stitched",
    ]);
    builder.push_record([
        "Chromosome",
        "Start",
        "End",
        "Name",
        "Strand",
        "Location",
        "Name",
    ]);

    let find = |results: &[Annotation], annotation: &Annotation| -> Option<usize> {
        results
            .iter()
            .position(|result| algebra::contains(result, annotation))
    };

    for annotation in &annotations {
        let merged = find(&merged, annotation)
            .map(|i| merged[i].to_string())
            .unwrap_or(String::from("<None>"));
        let stitched = find(&stitched, annotation)
            .map(|i| stitched[i].name().into_owned())
            .unwrap_or(String::from("<None>"));

        builder.push_record([
            annotation.chromosome().unwrap_or_default(),
            &annotation.start().to_string(),
            &annotation.end().to_string(),
            &annotation.name(),
            &annotation.orientation().to_string(),
            &merged,
            &stitched,
        ]);
    }

    let table = builder
        .build()
        .with(Style::rounded())
        .modify(Rows::new(1..), Alignment::left())
        .to_string();

    println!("{}", table);

    Ok(())
}
