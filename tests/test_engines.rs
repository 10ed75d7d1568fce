#[cfg(test)]
mod tests {
    use lifegrid::{
        count_live_neighbors, loader, patterns, plaintext, step, Config, Grid, Simulator, Topology,
    };

    const SEED: u64 = 42;
    const GENERATIONS: usize = 30;

    fn padded(grid: &Grid, margin: usize) -> Grid {
        (0..margin).fold(grid.clone(), |g, _| g.grown())
    }

    /// Checks that `small` appears in `large` at `(offset, offset)` and that
    /// `large` has no alive cells elsewhere.
    fn assert_embedded(small: &Grid, large: &Grid, offset: usize) {
        let (h, w) = small.dims();
        for row in 0..h {
            for col in 0..w {
                assert_eq!(
                    small.cell(row, col),
                    large.cell(row + offset, col + offset),
                    "mismatch at ({}, {})\n{}\n\n{}",
                    row,
                    col,
                    small,
                    large
                );
            }
        }
        assert_eq!(small.population(), large.population());
    }

    #[test]
    fn test_growth_matches_wide_fixed_field() {
        let margin = GENERATIONS + 2;
        for (i, fill_rate) in [0.2, 0.35, 0.5].into_iter().enumerate() {
            let soup = Grid::random(12, 16, Some(SEED + i as u64), fill_rate).unwrap();

            let growing = Simulator::new(Config::default().with_topology(Topology::AutoGrow))
                .simulate(soup.clone(), GENERATIONS)
                .unwrap();
            let fixed = Simulator::default()
                .simulate(padded(&soup, margin), GENERATIONS)
                .unwrap();

            for (small, large) in growing.iter().zip(fixed.iter()) {
                let rings = (small.height() - soup.height()) / 2;
                assert_eq!(small.width() - soup.width(), 2 * rings);
                assert_embedded(small, large, margin - rings);
            }
        }
    }

    #[test]
    fn test_growth_is_at_most_one_ring_per_step() {
        let soup = Grid::random(10, 10, Some(SEED), 0.6).unwrap();
        let generations = Simulator::new(Config::default().with_topology(Topology::AutoGrow))
            .simulate(soup, GENERATIONS)
            .unwrap();
        for pair in generations.windows(2) {
            let (h0, w0) = pair[0].dims();
            let (h1, w1) = pair[1].dims();
            assert!((h1, w1) == (h0, w0) || (h1, w1) == (h0 + 2, w0 + 2));
            assert_eq!(h1 != h0, pair[0].has_live_border());
        }
    }

    #[test]
    fn test_step_matches_neighbor_counts() {
        let soup = Grid::random(20, 30, Some(SEED), 0.4).unwrap();
        let next = step(&soup);
        for row in 0..soup.height() {
            for col in 0..soup.width() {
                let n = count_live_neighbors(&soup, row, col);
                let expected = if soup.cell(row, col).is_alive() {
                    n == 2 || n == 3
                } else {
                    n == 3
                };
                assert_eq!(next.cell(row, col).is_alive(), expected);
            }
        }
    }

    #[test]
    fn test_oscillators_return() {
        for pattern in [&patterns::BLINKER, &patterns::TOAD, &patterns::BEACON] {
            let start = pattern.grid().unwrap();
            for topology in [Topology::FixedBounds, Topology::AutoGrow] {
                let generations = Simulator::new(Config::default().with_topology(topology))
                    .simulate(start.clone(), 3)
                    .unwrap();
                assert_ne!(generations[1], start, "{}", pattern.name);
                assert_eq!(generations[2], start, "{}", pattern.name);
            }
        }
    }

    #[test]
    fn test_loaded_file_round_trip() {
        let path = std::env::temp_dir().join(format!("lifegrid-{}.cells", std::process::id()));
        let soup = Grid::random(9, 11, Some(SEED), 0.5).unwrap();
        let text = format!("!Name: soup\n!seed {}\n{}\n", SEED, plaintext::format(&soup));
        std::fs::write(&path, text).unwrap();

        let loaded =
            loader::load_file(&path, &plaintext::Glyphs::default(), loader::Padding::Strict)
                .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, soup);
        assert_eq!(
            plaintext::format(&plaintext::parse(&plaintext::format(&loaded)).unwrap()),
            plaintext::format(&soup)
        );
    }
}
