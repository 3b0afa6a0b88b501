//! The capability set: every operation the facade exposes.

use std::fmt;

/// Identifies one facade operation.
///
/// The client implements most of the administrative and data-plane surface;
/// the scheduled-delete family and point deletion are declared but
/// unsupported. `is_supported` lets callers and tests query capability
/// without exercising an error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Ping,
    WriteSeries,
    Query,
    CreateDatabase,
    DeleteDatabase,
    ListDatabases,
    CreateClusterAdmin,
    DeleteClusterAdmin,
    ListClusterAdmins,
    UpdateClusterAdmin,
    CreateDatabaseUser,
    DeleteDatabaseUser,
    ListDatabaseUsers,
    UpdateDatabaseUser,
    AlterDatabasePrivilege,
    AuthenticateDatabaseUser,
    ListContinuousQueries,
    DeleteContinuousQuery,
    DeletePoints,
    CreateScheduledDelete,
    DescribeScheduledDeletes,
    RemoveScheduledDelete,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 22] = [
        Self::Ping,
        Self::WriteSeries,
        Self::Query,
        Self::CreateDatabase,
        Self::DeleteDatabase,
        Self::ListDatabases,
        Self::CreateClusterAdmin,
        Self::DeleteClusterAdmin,
        Self::ListClusterAdmins,
        Self::UpdateClusterAdmin,
        Self::CreateDatabaseUser,
        Self::DeleteDatabaseUser,
        Self::ListDatabaseUsers,
        Self::UpdateDatabaseUser,
        Self::AlterDatabasePrivilege,
        Self::AuthenticateDatabaseUser,
        Self::ListContinuousQueries,
        Self::DeleteContinuousQuery,
        Self::DeletePoints,
        Self::CreateScheduledDelete,
        Self::DescribeScheduledDeletes,
        Self::RemoveScheduledDelete,
    ];

    /// Whether this client implements the operation. Decided at compile
    /// time; unsupported operations fail before any transport call.
    pub const fn is_supported(self) -> bool {
        !matches!(
            self,
            Self::DeletePoints
                | Self::CreateScheduledDelete
                | Self::DescribeScheduledDeletes
                | Self::RemoveScheduledDelete
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ping => "ping",
            Self::WriteSeries => "write_series",
            Self::Query => "query",
            Self::CreateDatabase => "create_database",
            Self::DeleteDatabase => "delete_database",
            Self::ListDatabases => "list_databases",
            Self::CreateClusterAdmin => "create_cluster_admin",
            Self::DeleteClusterAdmin => "delete_cluster_admin",
            Self::ListClusterAdmins => "list_cluster_admins",
            Self::UpdateClusterAdmin => "update_cluster_admin",
            Self::CreateDatabaseUser => "create_database_user",
            Self::DeleteDatabaseUser => "delete_database_user",
            Self::ListDatabaseUsers => "list_database_users",
            Self::UpdateDatabaseUser => "update_database_user",
            Self::AlterDatabasePrivilege => "alter_database_privilege",
            Self::AuthenticateDatabaseUser => "authenticate_database_user",
            Self::ListContinuousQueries => "list_continuous_queries",
            Self::DeleteContinuousQuery => "delete_continuous_query",
            Self::DeletePoints => "delete_points",
            Self::CreateScheduledDelete => "create_scheduled_delete",
            Self::DescribeScheduledDeletes => "describe_scheduled_deletes",
            Self::RemoveScheduledDelete => "remove_scheduled_delete",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_four_operations_are_unsupported() {
        let unsupported: Vec<Operation> =
            Operation::ALL.into_iter().filter(|op| !op.is_supported()).collect();
        assert_eq!(
            unsupported,
            vec![
                Operation::DeletePoints,
                Operation::CreateScheduledDelete,
                Operation::DescribeScheduledDeletes,
                Operation::RemoveScheduledDelete,
            ]
        );
    }

    #[test]
    fn data_plane_operations_are_supported() {
        assert!(Operation::Ping.is_supported());
        assert!(Operation::WriteSeries.is_supported());
        assert!(Operation::Query.is_supported());
        assert!(Operation::AuthenticateDatabaseUser.is_supported());
    }
}
