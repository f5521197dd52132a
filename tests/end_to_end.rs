//! Whole diagrams: regions, shaders and surfaces together.

use pretty_assertions::assert_eq;
use venn::{
    make_shader, negate, BuiltinStyles, Bounds, Canvas, Colour, Recorder, RegionFactory,
    Scene, ShadingStyle, Surface,
};

const UNIVERSE: Bounds = Bounds::new(20.0, 20.0, 350.0, 325.0);

#[test]
fn complement_scenario_on_recorder() {
    let mut rec = Recorder::new();
    let f = {
        let mut regions = RegionFactory::new(&mut rec, UNIVERSE);
        regions.universe();
        regions.circle(145.0, 140.0, 80.0)
    };

    let polka = make_shader(BuiltinStyles::POLKA, UNIVERSE).unwrap();
    let report = polka.apply(&!&f, &mut rec).unwrap();

    // First sample sits at the offset corner.
    assert!(rec.painted(22.0, 22.0));
    assert!(!rec.painted(145.0, 140.0));
    assert_eq!(report.sampled, polka.sample_count());
    assert_eq!(report.sampled, (43 + 1) * (40 + 1));

    rec.clear();
    let plain = make_shader(ShadingStyle::new(Colour::BLUE, 1.0, 1.0, 1.0, 1.0), UNIVERSE).unwrap();
    plain.apply(&f, &mut rec).unwrap();
    assert!(rec.painted(145.0, 140.0));
}

#[test]
fn complement_scenario_on_canvas() {
    let mut canvas = Canvas::new(400, 400, Colour::WHITE).unwrap();
    let f = {
        let mut regions = RegionFactory::new(&mut canvas, UNIVERSE);
        regions.universe();
        regions.circle(145.0, 140.0, 80.0)
    };

    let polka = make_shader(BuiltinStyles::POLKA, UNIVERSE).unwrap();
    polka.apply(&!&f, &mut canvas).unwrap();

    // The weight-4 dot at the offset corner covers (23, 23).
    assert_eq!(canvas.get(23, 23), Some(Colour::RED));
    assert_eq!(canvas.get(145, 140), Some(Colour::WHITE));

    let plain = make_shader(ShadingStyle::new(Colour::BLUE, 1.0, 1.0, 1.0, 1.0), UNIVERSE).unwrap();
    plain.apply(&f, &mut canvas).unwrap();
    assert_eq!(canvas.get(145, 140), Some(Colour::BLUE));
}

#[test]
fn negated_shader_paints_the_complement() {
    let domain = Bounds::new(0.0, 0.0, 100.0, 60.0);
    let mut rec = Recorder::new();
    let f = RegionFactory::new(&mut rec, domain).circle(50.0, 30.0, 20.0);
    rec.clear();

    let shader = make_shader(BuiltinStyles::SQUID, domain).unwrap();
    let mut inside = Recorder::new();
    let mut outside = Recorder::new();
    let a = shader.apply(&f, &mut inside).unwrap();
    let b = negate(&shader).apply(&f, &mut outside).unwrap();

    assert_eq!(a.painted + b.painted, shader.sample_count());

    let mut all: Vec<(f64, f64)> = inside.points();
    all.extend(outside.points());
    all.sort_by(|p, q| p.partial_cmp(q).unwrap());
    let mut grid: Vec<(f64, f64)> = shader.samples().collect();
    grid.sort_by(|p, q| p.partial_cmp(q).unwrap());
    assert_eq!(all, grid);
}

#[test]
fn later_layers_cover_earlier_ones() {
    let domain = Bounds::new(0.0, 0.0, 10.0, 10.0);
    let mut canvas = Canvas::new(12, 12, Colour::WHITE).unwrap();
    let f = RegionFactory::new(&mut canvas, domain).universe();

    let red = make_shader(ShadingStyle::new(Colour::RED, 1.0, 1.0, 0.0, 0.0), domain).unwrap();
    let blue = make_shader(ShadingStyle::new(Colour::BLUE, 1.0, 2.0, 0.0, 0.0), domain).unwrap();
    red.apply(&f, &mut canvas).unwrap();
    blue.apply(&f, &mut canvas).unwrap();

    assert_eq!(canvas.get(4, 4), Some(Colour::BLUE));
    assert_eq!(canvas.get(5, 5), Some(Colour::RED));
}

#[test]
fn command_stream_of_small_diagram() {
    let domain = Bounds::new(0.0, 0.0, 4.0, 4.0);
    let mut rec = Recorder::new();
    let f = {
        let mut regions = RegionFactory::new(&mut rec, domain);
        regions.universe();
        regions.circle(2.0, 2.0, 1.0)
    };

    let shader = make_shader(ShadingStyle::new(Colour::RED, 1.0, 2.0, 0.0, 0.0), domain).unwrap();
    negate(&shader).apply(&f, &mut rec).unwrap();

    insta::assert_snapshot!(rec.to_log(), @r"
    fill #FFFFFF00
    stroke #000000
    weight 1
    rect 0 0 4 4
    fill #FFFFFF00
    stroke #000000
    weight 3
    ellipse 2 2 2 2
    stroke #FF0000
    weight 1
    point 0 0
    point 0 2
    point 0 4
    point 2 0
    point 2 4
    point 4 0
    point 4 2
    point 4 4
    ");
}

#[test]
fn scene_matches_hand_built_diagram() {
    let scene = Scene::from_def(
        venn::parse_scene(
            r#"
regions:
  - { name: f, x: 145, y: 140, r: 80 }
  - { name: g, x: 235, y: 140, r: 80 }
layers:
  - { style: polka, shade: "!(f | g)" }
"#,
        )
        .unwrap(),
    )
    .unwrap();

    let mut from_scene = Recorder::new();
    scene.render(&mut from_scene).unwrap();

    let mut by_hand = Recorder::new();
    let (f, g) = {
        let mut regions = RegionFactory::new(&mut by_hand, Bounds::default());
        regions.universe();
        (regions.circle(145.0, 140.0, 80.0), regions.circle(235.0, 140.0, 80.0))
    };
    let polka = make_shader(BuiltinStyles::POLKA, Bounds::default()).unwrap();
    polka.apply(&(!&f & !&g), &mut by_hand).unwrap();

    assert_eq!(from_scene.commands(), by_hand.commands());
}

#[test]
fn surface_trait_objects_are_interchangeable() {
    let mut surfaces: Vec<Box<dyn Surface>> = vec![
        Box::new(Recorder::new()),
        Box::new(Canvas::new(50, 50, Colour::WHITE).unwrap()),
    ];
    let domain = Bounds::new(0.0, 0.0, 40.0, 40.0);
    let shader = make_shader(BuiltinStyles::OCEAN, domain).unwrap();

    for surface in surfaces.iter_mut() {
        let f = RegionFactory::new(surface.as_mut(), domain).circle(20.0, 20.0, 5.0);
        let report = shader.apply(&f, surface.as_mut()).unwrap();
        assert!(report.painted > 0);
    }
}
