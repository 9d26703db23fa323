//! The four-phase round driver: Announce, Commit, Challenge, Respond.
//!
//! One [`SigningNode`] runs at every node of the tree, oblivious to its own position
//! except through the [`crate::transport::Transport`] it is handed (root-ness, child
//! count and the actual wiring are all transport concerns). `listen` loops forever,
//! running one round per tick and never unwinding on error: a round that fails is logged
//! and the node returns to `Idle` to await the next tick, so one node's bad round never
//! takes the rest of the tree down with it.

use std::marker::PhantomData;

use digest::Digest;
use generic_ec::{hash_to_curve::FromHash, Curve, Point, Scalar, SecretScalar};
use rand_core::{CryptoRng, RngCore};

use crate::{
    aggregator::{aggregate_commitments, aggregate_responses},
    config::NodeConfig,
    error::{Bug, NodeError, ProtocolViolation},
    hash::hash_challenge,
    keys::KeyPair,
    messages::{
        AnnouncementMessage, ChallengeMessage, CommitmentMessage, Message, ResponseMessage,
    },
    round::{RoundContext, RoundState},
    transport::Transport,
    verifier::verify_responses,
};

/// One tree node's signing identity and round state machine.
///
/// Generic over the digest `D` used for the challenge hash (default `sha2::Sha256`) so a
/// deployment can swap it without touching the round logic.
pub struct SigningNode<E: Curve, D = sha2::Sha256> {
    name: String,
    keys: KeyPair<E>,
    /// Partial aggregate public key over this node's subtree, `X_hat = X + sum(children X_hat)`.
    /// Computed once by the tree collaborator at setup and held read-only for the node's life.
    x_hat: Point<E>,
    state: RoundState,
    round: Option<RoundContext<E>>,
    _digest: PhantomData<D>,
}

impl<E, D> SigningNode<E, D>
where
    E: Curve,
    Scalar<E>: FromHash,
    D: Digest + Clone + 'static,
{
    pub fn new(name: impl Into<String>, keys: KeyPair<E>, x_hat: Point<E>) -> Self {
        Self {
            name: name.into(),
            keys,
            x_hat,
            state: RoundState::Idle,
            round: None,
            _digest: PhantomData,
        }
    }

    /// Builds a node from the bootstrap collaborator's assembled [`NodeConfig`] rather
    /// than a bare name. Equivalent to `new(config.name, ..)`; `config.log_filter` is for
    /// that collaborator's own tracing-subscriber setup, not consumed here.
    pub fn from_config(config: NodeConfig, keys: KeyPair<E>, x_hat: Point<E>) -> Self {
        Self::new(config.name, keys, x_hat)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pub_key(&self) -> &Point<E> {
        &self.keys.pub_key
    }

    pub fn x_hat(&self) -> &Point<E> {
        &self.x_hat
    }

    /// The state left behind by the most recently completed (or aborted-mid-flight)
    /// round, for callers that need to inspect the signature values directly — tests, and
    /// whatever collaborator reads the root's final `(c, r_hat)` off the tree once a round
    /// responds. `None` before the first round and briefly during `listen`'s reset to `Idle`.
    pub fn round_context(&self) -> Option<&RoundContext<E>> {
        self.round.as_ref()
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Runs rounds forever, one per tick. Never returns except on transport exhaustion
    /// (the transport itself signals shutdown by erroring every call; see `cosig-testkit`'s
    /// in-memory transport for how a test ends this loop).
    pub async fn listen<T, R>(&mut self, transport: &mut T, rng: &mut R)
    where
        T: Transport<E> + ?Sized,
        R: RngCore + CryptoRng,
    {
        loop {
            if let Err(err) = self.run_round(transport, rng).await {
                tracing::error!(node = %self.name, error = %err, "round aborted");
            }
            self.state = RoundState::Idle;
            self.round = None;
        }
    }

    /// Runs exactly one round to completion (or to the error that aborted it), then
    /// returns instead of waiting for the next tick. `listen` is this in a loop; test
    /// harnesses and the simulation binary call this directly to get deterministic,
    /// single-round control.
    ///
    /// Spans all four phases for every node, root included: the root starts from its own
    /// tick, a non-root node starts from its parent's `Announcement` and, after sending its
    /// `Commitment` up, waits inline for the matching `Challenge` rather than returning —
    /// returning there would leave the parent's response gather blocked on a node that
    /// considers its round already over.
    pub async fn run_round<T, R>(&mut self, transport: &mut T, rng: &mut R) -> Result<(), NodeError>
    where
        T: Transport<E> + ?Sized,
        R: RngCore + CryptoRng,
    {
        if transport.is_root() {
            let message = transport.wait_tick().await?;
            self.announce(transport, rng, message).await
        } else {
            match transport.get_up().await? {
                Message::Announcement(AnnouncementMessage { message }) => {
                    self.announce(transport, rng, message).await
                }
                _ => Err(ProtocolViolation::UnexpectedVariant { expected: "Announcement" }.into()),
            }
        }
    }

    /// Broadcasts the message to sign down to every child, then proceeds to `commit`.
    async fn announce<T, R>(
        &mut self,
        transport: &mut T,
        rng: &mut R,
        message: Vec<u8>,
    ) -> Result<(), NodeError>
    where
        T: Transport<E> + ?Sized,
        R: RngCore + CryptoRng,
    {
        self.state = RoundState::Announced;

        if transport.n_children() > 0 {
            let msg = Message::Announcement(AnnouncementMessage { message: message.clone() });
            let msgs = std::iter::repeat(msg).take(transport.n_children()).collect();
            transport.put_down(msgs).await?;
        }

        self.commit(transport, rng, message).await
    }

    /// Draws a fresh nonce, gathers children's commitments, aggregates, and either
    /// finalizes (root) or sends the partial aggregate up.
    async fn commit<T, R>(
        &mut self,
        transport: &mut T,
        rng: &mut R,
        message: Vec<u8>,
    ) -> Result<(), NodeError>
    where
        T: Transport<E> + ?Sized,
        R: RngCore + CryptoRng,
    {
        let v = SecretScalar::<E>::random(rng);
        let v_point = Point::<E>::generator() * &v;

        let children_v_hat = if transport.n_children() > 0 {
            transport
                .get_down()
                .await?
                .into_iter()
                .enumerate()
                .map(|(index, msg)| match msg {
                    Message::Commitment(CommitmentMessage { v_hat, .. }) => Ok(v_hat),
                    _ => Err(ProtocolViolation::UnexpectedChildVariant { index, expected: "Commitment" }),
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };

        let v_hat = aggregate_commitments(v_point, children_v_hat);

        self.round = Some(RoundContext { v, v_point, v_hat, c: None, r: None, r_hat: None, message });
        self.state = RoundState::Committed;

        if transport.is_root() {
            self.finalize_commits(transport, rng).await
        } else {
            transport
                .put_up(Message::Commitment(CommitmentMessage { v: v_point, v_hat }))
                .await?;

            match transport.get_up().await? {
                Message::Challenge(ChallengeMessage { c }) => self.challenge(transport, rng, c).await,
                _ => Err(ProtocolViolation::UnexpectedVariant { expected: "Challenge" }.into()),
            }
        }
    }

    /// Root-only: derives the round's challenge from its own commitment and proceeds to
    /// `challenge` in place of receiving one from a parent.
    async fn finalize_commits<T, R>(&mut self, transport: &mut T, rng: &mut R) -> Result<(), NodeError>
    where
        T: Transport<E> + ?Sized,
        R: RngCore + CryptoRng,
    {
        let ctx = self.round.as_ref().ok_or(Bug::RoundContextMissing("finalize_commits"))?;
        let c = hash_challenge::<E, D>(&ctx.message, &ctx.v_hat);
        self.challenge(transport, rng, c).await
    }

    /// Records the challenge, broadcasts it down, and proceeds to `respond`.
    async fn challenge<T, R>(&mut self, transport: &mut T, rng: &mut R, c: Scalar<E>) -> Result<(), NodeError>
    where
        T: Transport<E> + ?Sized,
        R: RngCore + CryptoRng,
    {
        {
            let ctx = self.round.as_mut().ok_or(Bug::RoundContextMissing("challenge"))?;
            ctx.c = Some(c);
        }
        self.state = RoundState::Challenged;

        if transport.n_children() > 0 {
            let msg = Message::Challenge(ChallengeMessage { c });
            let msgs = std::iter::repeat(msg).take(transport.n_children()).collect();
            transport.put_down(msgs).await?;
        }

        self.respond(transport, rng).await
    }

    /// Computes this node's own response, gathers and aggregates children's responses,
    /// sends the partial aggregate up, then verifies the Schnorr identity (and, at the
    /// root, the challenge binding).
    ///
    /// Forwarding happens before verifying: a node whose own check fails still passes its
    /// (wrong) aggregate to its parent, so the parent's independent check also fails and
    /// the shallowest failing node in the tree points at the corrupted subtree. Verifying
    /// first and swallowing the send on failure would instead strand the parent waiting
    /// forever on a response that never arrives.
    async fn respond<T, R>(&mut self, transport: &mut T, _rng: &mut R) -> Result<(), NodeError>
    where
        T: Transport<E> + ?Sized,
        R: RngCore + CryptoRng,
    {
        let r = {
            let ctx = self.round.as_ref().ok_or(Bug::RoundContextMissing("respond"))?;
            let c = ctx.c.ok_or(Bug::ChallengeMissing("respond"))?;
            ctx.v.as_ref() - self.keys.priv_key.as_ref() * &c
        };

        let children_r_hat = if transport.n_children() > 0 {
            transport
                .get_down()
                .await?
                .into_iter()
                .enumerate()
                .map(|(index, msg)| match msg {
                    Message::Response(ResponseMessage { r_hat }) => Ok(r_hat),
                    _ => Err(ProtocolViolation::UnexpectedChildVariant { index, expected: "Response" }),
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };

        let r_hat = aggregate_responses(r, children_r_hat);

        {
            let ctx = self.round.as_mut().ok_or(Bug::RoundContextMissing("respond"))?;
            ctx.r = Some(r);
            ctx.r_hat = Some(r_hat);
        }

        self.state = RoundState::Responded;

        let is_root = transport.is_root();
        if !is_root {
            transport.put_up(Message::Response(ResponseMessage { r_hat })).await?;
        }

        let ctx = self.round.as_ref().ok_or(Bug::RoundContextMissing("respond"))?;
        verify_responses::<E, D>(&self.name, ctx, &self.x_hat, is_root)?;

        Ok(())
    }
}
