//! Concrete assignment scenarios exercised end to end through the public
//! `assign` entry point.

use locality_assign::{assign, Endpoint};

fn hosts(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}

fn roster(pairs: &[(&str, u16)]) -> Vec<Endpoint> {
    pairs.iter().map(|&(h, p)| Endpoint::new(h, p)).collect()
}

#[test]
fn two_partitions_share_a_host_one_prefers_the_other() {
    let affinities = hosts(&[&["h1"], &["h1"], &["h2"]]);
    let endpoints = roster(&[("h1", 1), ("h2", 1)]);

    let result = assign(&affinities, &endpoints).unwrap();

    assert_eq!(result[0].iter().map(|p| p.0).collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(result[1].iter().map(|p| p.0).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn no_alternating_path_leaves_a_host_overloaded() {
    let affinities = hosts(&[&["h1"], &["h1"], &["h1"], &["h1"]]);
    let endpoints = roster(&[("h1", 1), ("h2", 1)]);

    let result = assign(&affinities, &endpoints).unwrap();

    assert_eq!(result[0].len(), 4);
    assert!(result[1].is_empty());
}

#[test]
fn overlapping_affinity_splits_via_augmenting_path() {
    let affinities = hosts(&[&["h1", "h2"], &["h1", "h2"], &["h1"], &["h2"]]);
    let endpoints = roster(&[("h1", 1), ("h2", 1)]);

    let result = assign(&affinities, &endpoints).unwrap();

    assert_eq!(result[0].len(), 2);
    assert_eq!(result[1].len(), 2);
    assert!(result[0].iter().any(|p| p.0 == 2));
    assert!(result[1].iter().any(|p| p.0 == 3));
}

#[test]
fn partitions_with_no_affinity_round_robin() {
    let affinities = hosts(&[&[], &[], &[]]);
    let endpoints = roster(&[("h1", 1), ("h2", 1)]);

    let result = assign(&affinities, &endpoints).unwrap();

    assert_eq!(result[0].iter().map(|p| p.0).collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(result[1].iter().map(|p| p.0).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn endpoints_sharing_a_host_split_within_one() {
    let affinities = hosts(&[&["h1"], &["h1"], &["h1"]]);
    let endpoints = roster(&[("h1", 1), ("h1", 2)]);

    let result = assign(&affinities, &endpoints).unwrap();

    let sizes: Vec<usize> = result.iter().map(Vec::len).collect();
    assert_eq!(sizes.iter().sum::<usize>(), 3);
    assert!((sizes[0] as i64 - sizes[1] as i64).abs() <= 1);
}

#[test]
fn affinity_to_a_host_outside_the_roster_is_treated_as_bare() {
    let affinities = hosts(&[&["unknown-host"]]);
    let endpoints = roster(&[("h1", 1)]);

    let result = assign(&affinities, &endpoints).unwrap();

    assert_eq!(result[0].iter().map(|p| p.0).collect::<Vec<_>>(), vec![0]);
}

#[test]
fn empty_endpoint_roster_is_rejected() {
    let affinities = hosts(&[&["h1"]]);
    let result = assign(&affinities, &[]);
    assert!(result.is_err());
}

#[test]
fn large_batch_with_mixed_affinity_covers_every_partition_exactly_once() {
    let partition_count = 500;
    let host_names = ["h1", "h2", "h3"];
    let affinities: Vec<Vec<String>> = (0..partition_count)
        .map(|p| match p % 4 {
            0 => vec![],
            1 => vec![host_names[p % 3].to_string()],
            2 => vec!["unknown".to_string()],
            _ => vec![host_names[p % 3].to_string(), host_names[(p + 1) % 3].to_string()],
        })
        .collect();
    let endpoints = roster(&[("h1", 1), ("h2", 1), ("h2", 2), ("h3", 1)]);

    let result = assign(&affinities, &endpoints).unwrap();

    let mut seen: Vec<usize> = result.iter().flatten().map(|p| p.0).collect();
    seen.sort_unstable();
    let expected: Vec<usize> = (0..partition_count).collect();
    assert_eq!(seen, expected);
}
