//! Curve-bound session handle.

use crate::{
    CurveParameters, Error, Result,
    ecdsa::{self, Signature},
    keygen::{self, SecretScalar},
    params::check_length,
    registry,
};

#[derive(Debug)]
enum State {
    Uninitialized,
    Ready(CurveParameters),
    Destroyed,
}

/// Handle owning the domain parameters of one curve.
///
/// A session starts out uninitialized, becomes ready once [`Session::init`]
/// binds it to a curve, and is destroyed by [`Session::close`]. Operations
/// on an uninitialized session fail with [`Error::NotInitialized`]; on a
/// closed one with [`Error::HandleDestroyed`].
///
/// All byte buffers are big-endian and must have exactly the length reported
/// by the matching accessor. Lengths are validated before any computation,
/// and output buffers are only written once the whole operation succeeded.
///
/// Every operation except [`Session::close`] takes `&self`, so a ready
/// session can be shared between threads; closing requires exclusive access.
#[derive(Debug)]
pub struct Session {
    state: State,
}

impl Session {
    /// Create a session that is not yet bound to a curve.
    pub fn new() -> Self {
        Self {
            state: State::Uninitialized,
        }
    }

    /// Create a session bound to the curve called `name`.
    pub fn open(name: &str) -> Result<Self> {
        let mut session = Self::new();
        session.init(name)?;
        Ok(session)
    }

    /// Bind an uninitialized session to the curve called `name`.
    ///
    /// On failure the session stays uninitialized.
    pub fn init(&mut self, name: &str) -> Result<()> {
        match self.state {
            State::Uninitialized => {
                let params = registry::lookup(name)?;
                tracing::debug!(curve = params.name(), "session opened");
                self.state = State::Ready(params);
                Ok(())
            }
            State::Ready(_) => Err(Error::AlreadyInitialized),
            State::Destroyed => Err(Error::HandleDestroyed),
        }
    }

    /// Release the curve parameters.
    ///
    /// Only a ready session can be closed. Closing an uninitialized session
    /// fails with [`Error::NotInitialized`] and leaves it usable for
    /// [`Session::init`]; closing twice fails with [`Error::HandleDestroyed`].
    pub fn close(&mut self) -> Result<()> {
        match self.state {
            State::Ready(_) => {}
            State::Uninitialized => return Err(Error::NotInitialized),
            State::Destroyed => return Err(Error::HandleDestroyed),
        }

        if let State::Ready(params) = core::mem::replace(&mut self.state, State::Destroyed) {
            tracing::debug!(curve = params.name(), "session closed");
        }
        Ok(())
    }

    /// Is the session bound to a curve and not closed?
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// Domain parameters of the curve.
    pub fn params(&self) -> Result<&CurveParameters> {
        match &self.state {
            State::Ready(params) => Ok(params),
            State::Uninitialized => Err(Error::NotInitialized),
            State::Destroyed => Err(Error::HandleDestroyed),
        }
    }

    /// Registry name of the curve.
    pub fn curve_name(&self) -> Result<&'static str> {
        Ok(self.params()?.name())
    }

    /// Bit length of the field modulus `p`.
    pub fn prime_bit_length(&self) -> Result<u32> {
        Ok(self.params()?.prime_bits())
    }

    /// Byte length of the field modulus `p`.
    pub fn prime_byte_length(&self) -> Result<usize> {
        Ok(self.params()?.prime_bytes())
    }

    /// Write `p` into `out`, which must be [`Self::prime_byte_length`] long.
    pub fn prime(&self, out: &mut [u8]) -> Result<()> {
        self.params()?.write_prime(out)
    }

    /// Bit length of a point coordinate.
    pub fn coordinate_bit_length(&self) -> Result<u32> {
        self.prime_bit_length()
    }

    /// Byte length of a point coordinate buffer.
    pub fn coordinate_byte_length(&self) -> Result<usize> {
        self.prime_byte_length()
    }

    /// Bit length of the group order `n`.
    pub fn order_bit_length(&self) -> Result<u32> {
        Ok(self.params()?.order_bits())
    }

    /// Byte length of the group order `n`, and of every scalar buffer
    /// (`sk`, `ek`, `r`, `s`).
    pub fn order_byte_length(&self) -> Result<usize> {
        Ok(self.params()?.order_bytes())
    }

    /// Write `n` into `out`, which must be [`Self::order_byte_length`] long.
    pub fn order(&self, out: &mut [u8]) -> Result<()> {
        self.params()?.write_order(out)
    }

    /// Cofactor `h`.
    pub fn cofactor(&self) -> Result<u32> {
        Ok(self.params()?.cofactor())
    }

    /// Compute the public key for `sk` into `(qx_out, qy_out)`.
    pub fn generate_public_key(
        &self,
        qx_out: &mut [u8],
        qy_out: &mut [u8],
        sk: &[u8],
    ) -> Result<()> {
        let params = self.params()?;
        check_length(params.prime_bytes(), qx_out.len())?;
        check_length(params.prime_bytes(), qy_out.len())?;
        check_length(params.order_bytes(), sk.len())?;

        let q = keygen::generate(params, sk)?;
        params.field().write_be_bytes(&q.x(), qx_out)?;
        params.field().write_be_bytes(&q.y(), qy_out)?;
        Ok(())
    }

    /// Sign `hash` with `sk` and the ephemeral secret `ek`, writing the
    /// signature into `(r_out, s_out)`.
    ///
    /// `ek` must be secret and never reused; see [`crate::ecdsa`].
    pub fn generate_signature(
        &self,
        r_out: &mut [u8],
        s_out: &mut [u8],
        hash: &[u8],
        ek: &[u8],
        sk: &[u8],
    ) -> Result<()> {
        let params = self.params()?;
        let len = params.order_bytes();
        check_length(len, r_out.len())?;
        check_length(len, s_out.len())?;
        check_length(len, ek.len())?;
        check_length(len, sk.len())?;

        let ek = SecretScalar::from_be_bytes(params, ek)?;
        let sk = SecretScalar::from_be_bytes(params, sk)?;
        let signature = ecdsa::sign(params, hash, &ek, &sk)?;
        signature.write_be_bytes(params, r_out, s_out)
    }

    /// Check the signature `(r, s)` over `hash` against the public key
    /// `(qx, qy)`.
    ///
    /// A signature that does not verify is `Ok(false)`, not an error.
    pub fn verify_signature(
        &self,
        r: &[u8],
        s: &[u8],
        hash: &[u8],
        qx: &[u8],
        qy: &[u8],
    ) -> Result<bool> {
        let params = self.params()?;
        check_length(params.prime_bytes(), qx.len())?;
        check_length(params.prime_bytes(), qy.len())?;

        let signature = Signature::from_be_bytes(params, r, s)?;
        ecdsa::verify(params, hash, &signature, qx, qy)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let State::Ready(params) = &self.state {
            tracing::warn!(curve = params.name(), "session dropped without close()");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_transitions() {
        let mut session = Session::new();
        assert!(!session.is_ready());
        assert_eq!(session.prime_bit_length(), Err(Error::NotInitialized));

        assert_eq!(session.close(), Err(Error::NotInitialized));
        assert!(matches!(session.state, State::Uninitialized));

        assert_eq!(session.init("secp999r1"), Err(Error::UnsupportedCurve));
        assert!(!session.is_ready());

        session.init("secp256r1").unwrap();
        assert!(session.is_ready());
        assert_eq!(session.init("secp256k1"), Err(Error::AlreadyInitialized));
        assert_eq!(session.curve_name(), Ok("secp256r1"));

        session.close().unwrap();
        assert!(!session.is_ready());
        assert_eq!(session.init("secp256r1"), Err(Error::HandleDestroyed));
        assert_eq!(session.close(), Err(Error::HandleDestroyed));
    }

    #[test]
    fn session_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Session>();
    }
}
