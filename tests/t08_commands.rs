
use softgl::{command, ppm, Pipeline, Error, Source, Rgba8};
use std::path::PathBuf;

fn tmp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("softgl-t08-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

const SCENE: &str = "
png 10 10 scene.png

position 2   -0.6 -0.6   0.4 -0.6   -0.6 0.4
color    3    1 0 0       1 0 0      1 0 0
drawArraysTriangles 0 3
";

#[test]
fn t08_scene_matches_api() {
    let dir = tmp_dir("scene");
    let cmds = command::parse(SCENE).unwrap();
    assert_eq!(cmds.len(), 4);
    let mut pipe = Pipeline::default();
    command::execute_all(&mut pipe, &cmds, &dir).unwrap();
    let mut from_file = pipe.finalize().unwrap();
    assert_eq!(from_file.output, PathBuf::from("scene.png"));
    from_file.output = dir.join("scene.png");
    from_file.save().unwrap();

    let mut pipe = Pipeline::default();
    pipe.init_canvas(10, 10, dir.join("api.png")).unwrap();
    pipe.set_positions(2, &[-0.6,-0.6, 0.4,-0.6, -0.6,0.4]).unwrap();
    pipe.set_colors(3, &[1.,0.,0., 1.,0.,0., 1.,0.,0.]).unwrap();
    pipe.draw_arrays(0, 3).unwrap();
    let from_api = pipe.finalize().unwrap();
    from_api.save().unwrap();

    assert_eq!(from_file.pixf, from_api.pixf);
    assert!(ppm::img_diff(dir.join("scene.png"), dir.join("api.png")).unwrap());

    let (data, w, h) = ppm::read_file(dir.join("scene.png")).unwrap();
    assert_eq!((w, h), (10, 10));
    let i = (3 * w + 3) * 4;
    assert_eq!(&data[i .. i + 4], &[255, 0, 0, 255]);
    let i = (8 * w + 8) * 4;
    assert_eq!(&data[i .. i + 4], &[0, 0, 0, 0]);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn t08_texture_relative_to_scene() {
    let dir = tmp_dir("texture");
    image::save_buffer(dir.join("tex.png"), &[0, 200, 100], 1, 1,
                       image::ColorType::Rgb8).unwrap();
    let scene = "png 2 2 out.png
                 position 2 -1 -1 1 -1 1 1 -1 -1 1 1 -1 1
                 texcoord 2 0 0 1 0 1 1 0 0 1 1 0 1
                 texture tex.png
                 drawArraysTriangles 0 6";
    let cmds = command::parse(scene).unwrap();
    let mut pipe = Pipeline::default();
    command::execute_all(&mut pipe, &cmds, &dir).unwrap();
    let canvas = pipe.finalize().unwrap();
    for &(x, y) in &[(0, 0), (1, 0), (0, 1), (1, 1)] {
        assert_eq!(canvas.pixf.get((x, y)), Rgba8::new(0, 200, 100, 255));
    }
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn t08_indexed_scene() {
    let scene = "png 4 4 out.png
                 position 2 -1 -1 1 -1 1 1 -1 1
                 color 3 1 1 1 1 1 1 1 1 1 1 1 1
                 elements 0 1 2 0 2 3
                 drawElementsTriangles 6 0";
    let cmds = command::parse(scene).unwrap();
    let mut pipe = Pipeline::default();
    command::execute_all(&mut pipe, &cmds, ".").unwrap();
    let canvas = pipe.finalize().unwrap();
    for y in 0 .. 4 {
        for x in 0 .. 4 {
            assert_eq!(canvas.pixf.get((x, y)), Rgba8::white());
        }
    }
}

#[test]
fn t08_errors_stop_execution() {
    let cmds = command::parse("png 4 4 out.png\nposition 2 -1 -1 1 -1 -1 1\n\
                               drawArraysTriangles 0 6\ndepth").unwrap();
    let mut pipe = Pipeline::default();
    assert!(matches!(command::execute_all(&mut pipe, &cmds, "."),
                     Err(Error::IndexOutOfRange { .. })));
    assert!(!pipe.modes().depth);

    assert!(matches!(command::parse("png 4 4 out.png\nfsaa two\n"),
                     Err(Error::Parse { line: 2, .. })));
}
