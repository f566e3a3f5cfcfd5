//! Provides [`Ellipsoid`] and [`KRASOVSKY_1940`].

/// A biaxial ellipsoid.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Ellipsoid {
    /// The semi-major axis \[m\]
    pub a: f64,
    /// The squared eccentricity
    pub ee: f64,
}

/// The Krasovsky 1940 ellipsoid, which GCJ-02 offsets are scaled with.
pub const KRASOVSKY_1940: Ellipsoid = Ellipsoid {
    a: 6378245.0,
    ee: 0.00669342162296594323,
};

impl Ellipsoid {
    /// Returns 1 − 𝑒² sin² 𝜑, `phi` in \[rad\].
    #[inline]
    fn magic(&self, phi: f64) -> f64 {
        let s = phi.sin();
        1.0 - self.ee * s * s
    }

    /// Returns the radius of curvature in the meridian \[m\] at `phi` \[rad\].
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::ellipsoid::KRASOVSKY_1940;
    /// let e = KRASOVSKY_1940;
    /// assert_eq!(e.meridian_radius(0.0), e.a * (1.0 - e.ee));
    /// ```
    #[inline]
    pub fn meridian_radius(&self, phi: f64) -> f64 {
        let magic = self.magic(phi);
        (self.a * (1.0 - self.ee)) / (magic * magic.sqrt())
    }

    /// Returns the radius of curvature in the prime vertical \[m\] at `phi` \[rad\].
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::ellipsoid::KRASOVSKY_1940;
    /// let e = KRASOVSKY_1940;
    /// assert_eq!(e.prime_vertical_radius(0.0), e.a);
    /// ```
    #[inline]
    pub fn prime_vertical_radius(&self, phi: f64) -> f64 {
        self.a / self.magic(phi).sqrt()
    }
}
