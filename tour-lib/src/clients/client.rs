//! Typed client on top of a [`Connection`].
//!
//! Provides one method per command the tour issues. Every method builds the
//! command, sends it through the connection and converts the reply.

use crate::cmd::{
    self, ClientGetName, ClientId, ClientList, Eval, Expiry, Get, Info, MGet, MSet, Protocol, Set,
    SetNx, Sort, ZInterStore, ZRangeByScore,
};
use crate::info::{self, ClusterMode};
use crate::{Cluster, ClusterConfig, Connection, Standalone, StandaloneConfig, Topology};
use redis::{Cmd, FromRedisValue, InfoDict, RedisResult, Value};
use tracing::{debug, instrument};

/// Works the same way over a [`Standalone`] node or a [`Cluster`].
pub struct Client<C> {
    connection: C,
}

impl Client<Standalone> {
    /// Prepare a client for a single node. No connection is made until the
    /// first command.
    pub fn standalone(config: &StandaloneConfig) -> crate::Result<Client<Standalone>> {
        Ok(Client::new(Standalone::new(config)?))
    }
}

impl Client<Cluster> {
    /// Prepare a client for a cluster. The seeds are contacted on the first
    /// command.
    pub fn cluster(config: &ClusterConfig) -> crate::Result<Client<Cluster>> {
        Ok(Client::new(Cluster::new(config)?))
    }
}

impl<C: Connection> Client<C> {
    pub fn new(connection: C) -> Client<C> {
        Client { connection }
    }

    pub fn topology(&self) -> Topology {
        self.connection.topology()
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Server information, optionally limited to one `section`.
    #[instrument(skip(self))]
    pub async fn info(&mut self, section: Option<&str>) -> RedisResult<InfoDict> {
        let value: Value = self.request(Info::new(section).into_cmd()).await?;
        info::parse_info(&value)
    }

    /// Ask the server whether it runs in cluster mode.
    pub async fn cluster_mode(&mut self) -> RedisResult<ClusterMode> {
        let info = self.info(Some("cluster")).await?;
        Ok(ClusterMode::from_info(&info))
    }

    /// Name of this connection, `None` if it was never named.
    #[instrument(skip(self))]
    pub async fn client_getname(&mut self) -> RedisResult<Option<String>> {
        self.request(ClientGetName.into_cmd()).await
    }

    #[instrument(skip(self))]
    pub async fn client_id(&mut self) -> RedisResult<i64> {
        self.request(ClientId.into_cmd()).await
    }

    #[instrument(skip(self))]
    pub async fn client_list(&mut self) -> RedisResult<String> {
        self.request(ClientList.into_cmd()).await
    }

    /// Set `key` to hold `value`.
    ///
    /// Replies `"OK"`.
    #[instrument(skip(self))]
    pub async fn set(
        &mut self,
        key: &str,
        value: &str,
        expiry: Option<Expiry>,
    ) -> RedisResult<String> {
        self.request(Set::new(key, value, expiry).into_cmd()).await
    }

    /// Get the value of key.
    ///
    /// # return
    ///
    /// If the key does not exist the special value `None` is returned.
    #[instrument(skip(self))]
    pub async fn get(&mut self, key: &str) -> RedisResult<Option<String>> {
        self.request(Get::new(key).into_cmd()).await
    }

    #[instrument(skip(self))]
    pub async fn mset(&mut self, pairs: MSet) -> RedisResult<String> {
        self.request(pairs.into_cmd()).await
    }

    /// One entry per key, `None` for missing keys.
    #[instrument(skip(self))]
    pub async fn mget(&mut self, keys: &[String]) -> RedisResult<Vec<Option<String>>> {
        self.request(MGet::new(keys).into_cmd()).await
    }

    /// Set `key` only if it does not exist.
    ///
    /// # return
    ///
    /// `true` if the key was written.
    #[instrument(skip(self))]
    pub async fn set_nx(
        &mut self,
        key: &str,
        value: &str,
        expiry: Option<Expiry>,
    ) -> RedisResult<bool> {
        let reply: Option<String> = self.request(SetNx::new(key, value, expiry).into_cmd()).await?;
        Ok(reply.is_some())
    }

    #[instrument(skip(self))]
    pub async fn sort(&mut self, sort: Sort) -> RedisResult<Vec<String>> {
        self.request(sort.into_cmd()).await
    }

    /// `(member, score)` pairs in score order. `range` must ask for scores.
    #[instrument(skip(self))]
    pub async fn zrangebyscore_withscores(
        &mut self,
        range: ZRangeByScore,
    ) -> RedisResult<Vec<(String, f64)>> {
        self.request(range.with_scores().into_cmd()).await
    }

    /// Cardinality of the stored intersection.
    #[instrument(skip(self))]
    pub async fn zinterstore(&mut self, store: ZInterStore) -> RedisResult<i64> {
        self.request(store.into_cmd()).await
    }

    #[instrument(skip(self))]
    pub async fn eval<T: FromRedisValue>(&mut self, script: Eval) -> RedisResult<T> {
        self.request(script.into_cmd()).await
    }

    /// Send an arbitrary command.
    #[instrument(skip(self, command), fields(request = %cmd::describe(command)))]
    pub async fn raw<T: FromRedisValue>(&mut self, command: &Cmd) -> RedisResult<T> {
        let value = self.connection.query(command).await?;
        debug!(response = ?value);
        T::from_redis_value(&value)
    }

    async fn request<T: FromRedisValue>(&mut self, command: Cmd) -> RedisResult<T> {
        debug!(request = %cmd::describe(&command));
        let value = self.connection.query(&command).await?;
        debug!(response = ?value);
        T::from_redis_value(&value)
    }
}
