use arithmetica::{
    domains::{float::F64, number::Number, rational::Rational},
    tensors::matrix::{Matrix, MatrixError, Vector},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, nrows: usize, ncols: usize) -> Matrix<Number> {
    Matrix::from_linear(
        (0..nrows * ncols)
            .map(|_| Number::from(Rational::sample(rng, (-50, 50))))
            .collect(),
        nrows,
        ncols,
    )
    .unwrap()
}

fn random_vector(rng: &mut StdRng, len: usize) -> Vector<Number> {
    (0..len)
        .map(|_| Number::from(Rational::sample(rng, (-50, 50))))
        .collect()
}

#[test]
fn transpose_twice() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..50 {
        let (r, c) = (rng.gen_range(1..5), rng.gen_range(1..5));
        let m = random_matrix(&mut rng, r, c);

        let t = m.transpose_cloned();
        assert_eq!(t.dims(), (c, r));
        assert_eq!(t.transpose_cloned(), m);

        let mut n = m.clone();
        n.transpose().transpose();
        assert_eq!(n, m);
    }
}

#[test]
fn append_then_remove() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..50 {
        let (r, c) = (rng.gen_range(1..5), rng.gen_range(1..5));
        let m = random_matrix(&mut rng, r, c);
        let before = format!("{:?}", m);

        let row = random_vector(&mut rng, c);
        let grown = m.append_row_cloned(&row).unwrap();
        assert_eq!(grown.dims(), (r + 1, c));
        assert_eq!(grown.get_row(r).unwrap(), row);
        assert_eq!(grown.remove_row_cloned(r).unwrap(), m);

        let col = random_vector(&mut rng, r);
        let grown = m.append_col_cloned(&col).unwrap();
        assert_eq!(grown.dims(), (r, c + 1));
        assert_eq!(grown.get_col(c).unwrap(), col);
        assert_eq!(grown.remove_col_cloned(c).unwrap(), m);

        // the cloned forms leave the receiver untouched
        assert_eq!(format!("{:?}", m), before);
    }
}

#[test]
fn out_of_range() {
    let m: Matrix<Number> = Matrix::new(2, 3);

    assert_eq!(
        m.get(2, 0),
        Err(MatrixError::IndexOutOfRange { index: 2, bound: 2 })
    );
    assert!(m.get_row(2).is_err());
    assert!(m.remove_col_cloned(3).is_err());
    assert!(m.set_cloned(0, 3, Number::from(1)).is_err());
    assert!(m.remove_rows_cloned(&[0, 2]).is_err());
}

#[test]
fn product_laws() {
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..20 {
        let a = random_matrix(&mut rng, 2, 3);
        let b = random_matrix(&mut rng, 3, 4);
        let v = random_vector(&mut rng, 4);

        // (AB)v = A(Bv)
        let ab = a.multiply_with_matrix_cloned(&b).unwrap();
        assert_eq!(
            ab.multiply_with_vector(&v, false).unwrap(),
            a.multiply_with_vector(&b.multiply_with_vector(&v, false).unwrap(), false)
                .unwrap()
        );

        // (AB)^T = B^T A^T
        assert_eq!(
            ab.transpose_cloned(),
            b.transpose_cloned()
                .multiply_with_matrix_cloned(&a.transpose_cloned())
                .unwrap()
        );

        // w A = A^T w
        let w = random_vector(&mut rng, 2);
        assert_eq!(
            a.multiply_with_vector(&w, true).unwrap(),
            a.transpose_cloned().multiply_with_vector(&w, false).unwrap()
        );
    }
}

#[test]
fn real_entries() {
    let m = Matrix::from_nested_vec(vec![
        vec![F64::from(0.5), F64::from(1.5)],
        vec![F64::from(-1.), F64::from(2.)],
    ])
    .unwrap();

    let v = Vector::new(vec![F64::from(2.), F64::from(2.)]);
    assert_eq!(
        m.multiply_with_vector(&v, false).unwrap(),
        Vector::new(vec![F64::from(4.), F64::from(2.)])
    );
    assert_eq!(m.to_string(), "{{0.5,1.5},{-1.0,2.0}}");
    assert_eq!(m.norm_squared(), F64::from(7.5));
}

#[test]
fn random_real_entries() {
    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..20 {
        let (r, c) = (rng.gen_range(1..5), rng.gen_range(1..5));
        let m = Matrix::from_linear(
            (0..r * c)
                .map(|_| F64::sample(&mut rng, (-10., 10.)))
                .collect(),
            r,
            c,
        )
        .unwrap();

        assert_eq!(m.transpose_cloned().transpose_cloned(), m);

        // scaling by a power of two is exact
        let doubled = m.multiply_with_scalar_cloned(&F64::from(2.));
        assert_eq!(m.add_matrix_cloned(&m).unwrap(), doubled);
        assert_eq!(
            doubled.norm_squared().into_inner(),
            4. * m.norm_squared().into_inner()
        );
    }
}
