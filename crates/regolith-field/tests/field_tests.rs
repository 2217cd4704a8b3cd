//! End-to-end field generation scenarios.

use regolith_field::{AsteroidField, FieldParams};
use regolith_mesh::Geosphere;

#[test]
fn geosphere_level_counts_match_the_subdivision_schedule() {
    let sphere = Geosphere::build(3);

    assert_eq!(sphere.level_vertex_range(0).len(), 12, "level 0 vertex count");
    assert_eq!(sphere.level_triangle_count(0), 20, "level 0 triangle count");
    assert_eq!(
        sphere.level_triangle_count(3),
        20 * 4usize.pow(3),
        "level 3 triangle count is 20 * 4^3"
    );
}

#[test]
fn offset_table_slices_are_valid_triangle_lists() {
    let sphere = Geosphere::build(3);
    assert_eq!(sphere.index_offsets.len(), 5, "levels + 2 entries");

    for level in 0..sphere.level_count() {
        let indices = &sphere.mesh.indices[sphere.level_index_range(level)];
        assert!(!indices.is_empty(), "level {level} has indices");
        assert_eq!(indices.len() % 3, 0, "level {level} is a triangle list");

        let vertex_range = sphere.level_vertex_range(level);
        for &i in indices {
            assert!(
                vertex_range.contains(&(i as usize)),
                "level {level} index {i} outside its vertex range"
            );
        }
    }
}

#[test]
fn hundred_instance_field_is_reproducible_and_distinct() {
    let params = FieldParams::new(100, 3, 100);
    let field = AsteroidField::generate(&params);

    let base_vertices = Geosphere::build(3).mesh.vertex_count();
    assert_eq!(
        field.vertex_count_per_mesh as usize, base_vertices,
        "every instance carries the full base vertex set"
    );
    assert_eq!(
        field.positions.len(),
        base_vertices * 100,
        "instance-major layout covers all 100 instances"
    );

    // Bit-identical regeneration from the same seed and counts.
    let again = AsteroidField::generate(&params);
    assert_eq!(field.positions, again.positions);
    assert_eq!(field.normals, again.normals);

    // With the fixed noise parameters, no two instances coincide.
    for a in 0..100 {
        for b in (a + 1)..100 {
            if field.instance_positions(a) == field.instance_positions(b) {
                panic!("instances {a} and {b} have identical displaced positions");
            }
        }
    }
}

#[test]
fn different_seeds_produce_different_fields() {
    let a = AsteroidField::generate(&FieldParams::new(4, 2, 1));
    let b = AsteroidField::generate(&FieldParams::new(4, 2, 2));
    assert_ne!(a.positions, b.positions);
}

#[test]
fn parallel_generation_honors_the_reproducibility_contract() {
    let params = FieldParams::new(32, 3, 100);
    let serial = AsteroidField::generate(&params);
    let parallel = AsteroidField::generate_parallel(&params);
    assert_eq!(serial.positions, parallel.positions);
    assert_eq!(serial.normals, parallel.normals);
}

#[test]
fn every_level_is_renderable_for_every_instance() {
    let field = AsteroidField::generate(&FieldParams::new(3, 2, 55));
    for level in 0..field.level_count() {
        let indices = field.level_indices(level);
        assert_eq!(indices.len() % 3, 0);
        for instance in 0..field.instance_count {
            let positions = field.instance_positions(instance);
            for &i in indices {
                assert!(
                    (i as usize) < positions.len(),
                    "level {level} index {i} exceeds instance vertex count"
                );
            }
        }
    }
}
