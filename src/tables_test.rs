use super::*;

/// Edge mask recomputed from corner signs: an edge is crossed when exactly
/// one of its endpoints is inside.
fn reference_edge_mask(corner_mask: usize) -> u16 {
  let mut edge_mask = 0u16;
  for (edge, [c0, c1]) in EDGE_CONNECTIONS.iter().enumerate() {
    let inside0 = (corner_mask >> c0) & 1;
    let inside1 = (corner_mask >> c1) & 1;
    if inside0 != inside1 {
      edge_mask |= 1 << edge;
    }
  }
  edge_mask
}

#[test]
fn homogeneous_cases_are_empty() {
  assert_eq!(EDGE_TABLE[0], 0);
  assert_eq!(EDGE_TABLE[255], 0);
  assert_eq!(TRI_TABLE[0][0], -1);
  assert_eq!(TRI_TABLE[255][0], -1);
}

#[test]
fn edge_table_matches_corner_signs() {
  for mask in 0..256 {
    assert_eq!(
      EDGE_TABLE[mask],
      reference_edge_mask(mask),
      "edge mask mismatch for corner mask {:#010b}",
      mask
    );
  }
}

#[test]
fn edge_table_is_complement_symmetric() {
  // Flipping inside/outside crosses the same edges
  for mask in 0..256 {
    assert_eq!(EDGE_TABLE[mask], EDGE_TABLE[255 - mask]);
  }
}

#[test]
fn tri_table_rows_are_terminated_triples() {
  for mask in 0..256 {
    let row = &TRI_TABLE[mask];
    let used = row.iter().take_while(|&&e| e >= 0).count();
    assert_eq!(used % 3, 0, "case {} has a partial triangle", mask);
    assert!(used / 3 <= 5, "case {} exceeds 5 triangles", mask);
    // Nothing after the terminator
    assert!(row[used..].iter().all(|&e| e == -1));
  }
}

#[test]
fn tri_table_references_only_crossed_edges() {
  for mask in 0..256 {
    let crossed = EDGE_TABLE[mask];
    for &edge in TRI_TABLE[mask].iter().take_while(|&&e| e >= 0) {
      assert!(
        crossed & (1 << edge) != 0,
        "case {} references uncrossed edge {}",
        mask,
        edge
      );
    }
  }
}

#[test]
fn every_crossed_edge_is_used() {
  for mask in 0..256 {
    let mut used = 0u16;
    for &edge in TRI_TABLE[mask].iter().take_while(|&&e| e >= 0) {
      used |= 1 << edge;
    }
    assert_eq!(used, EDGE_TABLE[mask], "case {} drops a crossed edge", mask);
  }
}

#[test]
fn edges_join_adjacent_corners() {
  for [c0, c1] in EDGE_CONNECTIONS {
    let a = CORNER_OFFSETS[c0];
    let b = CORNER_OFFSETS[c1];
    let diff: u32 = (0..3).map(|i| a[i].abs_diff(b[i])).sum();
    assert_eq!(diff, 1, "edge [{}, {}] is not axis-aligned", c0, c1);
  }
}

#[test]
fn single_corner_emits_one_triangle() {
  for corner in 0..8 {
    let mask = 1usize << corner;
    let count = TRI_TABLE[mask].iter().take_while(|&&e| e >= 0).count() / 3;
    assert_eq!(count, 1, "lone corner {} should clip to one triangle", corner);
  }
}
