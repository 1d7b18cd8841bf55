use crate::context::GenerationContext;
use crate::generation::generate_galaxy;
use crate::output::XyzWriter;

#[test]
fn one_line_per_system() {
    let mut ctx = GenerationContext::new(42, 25).unwrap();
    let arenas = generate_galaxy(&mut ctx);

    let mut writer = XyzWriter::new(Vec::new());
    for arena in &arenas {
        writer.write_arena(arena).unwrap();
    }
    assert_eq!(writer.records(), 25);

    let bytes = writer.finish().unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text.lines().count(), 25);
}

#[test]
fn records_carry_position_and_color() {
    let mut ctx = GenerationContext::new(42, 5).unwrap();
    let arenas = generate_galaxy(&mut ctx);

    let mut writer = XyzWriter::new(Vec::new());
    for arena in &arenas {
        writer.write_arena(arena).unwrap();
    }
    let text = String::from_utf8(writer.finish().unwrap()).unwrap();

    for (line, arena) in text.lines().zip(&arenas) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(fields.len(), 6);

        let x: f64 = fields[0].parse().unwrap();
        let r: u8 = fields[3].parse().unwrap();
        assert!((x - arena.coordinates.x).abs() < 1e-5);
        assert_eq!(r, arena.primary_star().color.r);
    }
}

#[test]
fn coordinates_are_fixed_width() {
    let mut ctx = GenerationContext::new(7, 10).unwrap();
    let arenas = generate_galaxy(&mut ctx);

    let mut writer = XyzWriter::new(Vec::new());
    for arena in &arenas {
        writer.write_arena(arena).unwrap();
    }
    let text = String::from_utf8(writer.finish().unwrap()).unwrap();

    for line in text.lines() {
        for field in line.split_whitespace().take(3) {
            // Width 9 zero-padded, one extra column for a leading minus.
            assert!(field.len() >= 9, "narrow field {:?}", field);
            assert!(field.contains('.'));
        }
    }
}
