use console::Style;
use patchmatch_core::pipeline::{DetectionConfig, DetectionOutput};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_run_summary(config: &DetectionConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("PatchMatch Detection"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(20)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Channels"),
        s.method.apply_to(config.channels)
    );
    println!();

    let pm = &config.patch_match;
    println!("  {}", s.header.apply_to("Search"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Patch"),
        s.value.apply_to(format!("{0}x{0} px", pm.patch_size))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Distance"),
        s.method.apply_to(pm.distance)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Iterations"),
        s.value.apply_to(config.iterations)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Border"),
        s.value.apply_to(pm.border_size)
    );
    if pm.non_zero_nnf {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Zero offset"),
            s.value.apply_to("excluded")
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Zero offset"),
            s.disabled.apply_to("allowed")
        );
    }
    match config.seed {
        Some(seed) => println!(
            "    {:<12}{}",
            s.label.apply_to("Seed"),
            s.value.apply_to(seed)
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Seed"),
            s.disabled.apply_to("random")
        ),
    }
    println!();

    let mask = &config.mask;
    println!("  {}", s.header.apply_to("Mask"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Threshold"),
        s.method.apply_to(&mask.threshold_method)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Min offset"),
        s.value.apply_to(mask.min_offset)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Min area"),
        s.value.apply_to(mask.min_area)
    );
    if !mask.opening {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Opening"),
            s.disabled.apply_to("disabled")
        );
    }
    println!();
}

pub fn print_regions(output: &DetectionOutput) {
    let s = Styles::new();
    let mask = &output.mask;

    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(format!("{:.4}", mask.threshold))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Coverage"),
        s.value.apply_to(format!("{:.2}%", mask.coverage() * 100.0))
    );

    if mask.regions.is_empty() {
        println!(
            "  {:<14}{}",
            s.header.apply_to("Regions"),
            s.disabled.apply_to("none")
        );
        return;
    }

    println!("  {}", s.header.apply_to("Regions"));
    for (i, region) in mask.regions.iter().enumerate() {
        let (r0, r1, c0, c1) = region.bbox;
        println!(
            "    {}. {} rows {}-{} cols {}-{}  offset {}  ({:.0}% coherent)",
            s.label.apply_to(i + 1),
            s.value.apply_to(format!("{} px", region.area)),
            r0,
            r1,
            c0,
            c1,
            s.method.apply_to(region.offset),
            region.coherence * 100.0
        );
    }
}
