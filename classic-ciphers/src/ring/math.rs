//! Implementation of ring ops using modular arithmetic.

use crate::errors::CipherError;

use num_integer::Integer;

/// Reduces `x` into `[0, m)`, wrapping negative values around the modulus.
///
/// Unlike the `%` operator, the result never takes the sign of `x`.
///
/// # Panics
///
/// Panics if `m` is 0.
///
/// # Example
///
/// ```
/// # use classic_ciphers::ring::wrap_mod;
/// assert_eq!(wrap_mod(-1, 26), 25);
/// assert_eq!(wrap_mod(30, 26), 4);
/// assert_eq!(wrap_mod(0, 26), 0);
/// assert_eq!(wrap_mod(-53, 26), 25);
/// assert_eq!(wrap_mod(-1, u64::MAX), u64::MAX - 1);
/// ```
pub fn wrap_mod(x: i64, m: u64) -> u64 {
    // the remainder is below m, so it always fits back into u64
    (x as i128).rem_euclid(m as i128) as u64
}

/// Finds the smallest `c` in `[0, m)` with `(a * c) mod m == 1` by exhaustive search.
///
/// Returns `None` when no such `c` exists, i.e. when `gcd(a, m) != 1` or `m <= 1`.
///
/// # Example
///
/// ```
/// # use classic_ciphers::ring::modular_multiplicative_inverse;
/// assert_eq!(modular_multiplicative_inverse(5, 26), Some(21));
/// assert_eq!(modular_multiplicative_inverse(4, 26), None);
/// ```
pub fn modular_multiplicative_inverse(a: i64, m: u64) -> Option<u64> {
    let a = a as i128;
    let m_wide = m as i128;
    (0..m).find(|&c| (a * c as i128).rem_euclid(m_wide) == 1)
}

/// The finite ring Z_26 of letter positions.
///
/// Elements are carried as `i64`; the modulus is small enough that every
/// normalized element converts back losslessly.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// The ring of letter positions, Z_26.
    pub fn alphabet() -> Self {
        Ring {
            modulus: super::ALPHABET_LEN,
        }
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::ring::Ring;
    /// assert_eq!(Ring::alphabet().modulus(), 26);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.normalize(30), 4);
    /// assert_eq!(ring.normalize(-1), 25);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        wrap_mod(value, self.modulus) as i64
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.add(7, 8), 15); // H + 8 -> P
    /// assert_eq!(ring.add(25, 1), 0);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm + b_norm)
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.sub(3, 5), 24);
    /// assert_eq!(ring.sub(-2, 3), 21);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm - b_norm)
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before
    /// the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.mul(5, 21), 1);
    /// assert_eq!(ring.mul(-2, 6), 14);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        self.normalize(result as i64)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::NoInverse` if the inverse does not exist or `a` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.inv(5).unwrap(), 21);
    /// assert_eq!(ring.inv(25).unwrap(), 25);
    /// assert!(ring.inv(13).is_err());
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, CipherError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(CipherError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let egcd = a_norm.extended_gcd(&(self.modulus as i64));
        if egcd.gcd != 1 {
            return Err(CipherError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, egcd.gcd
            )));
        }

        Ok(self.normalize(egcd.x))
    }
}
