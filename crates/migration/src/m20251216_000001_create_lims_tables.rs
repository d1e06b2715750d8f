use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Roles).json_binary().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_username")
                    .table(Users::Table)
                    .col(Users::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create clients table
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clients::ClientCode)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Clients::Name).string().not_null())
                    .col(ColumnDef::new(Clients::Contact).string())
                    .col(ColumnDef::new(Clients::PhoneNumber).string())
                    .col(ColumnDef::new(Clients::Email).string())
                    .col(ColumnDef::new(Clients::Address).string())
                    .col(
                        ColumnDef::new(Clients::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Clients::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create samples table
        manager
            .create_table(
                Table::create()
                    .table(Samples::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Samples::SampleNumber)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Samples::ClientCode).string().not_null())
                    .col(
                        ColumnDef::new(Samples::EntryDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Samples::Description).text().not_null())
                    .col(ColumnDef::new(Samples::SamplingDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Samples::Observations).text())
                    .col(
                        ColumnDef::new(Samples::AnalysisQuantity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Samples::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Samples::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sample_client")
                            .from(Samples::Table, Samples::ClientCode)
                            .to(Clients::Table, Clients::ClientCode)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create analyses table
        manager
            .create_table(
                Table::create()
                    .table(Analyses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Analyses::AnalysisNumber)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Analyses::IdUser).integer().not_null())
                    .col(ColumnDef::new(Analyses::SampleNumber).integer().not_null())
                    .col(ColumnDef::new(Analyses::ClientCode).string().not_null())
                    .col(
                        ColumnDef::new(Analyses::SowDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Analyses::TypeAnalysis).string().not_null())
                    .col(
                        ColumnDef::new(Analyses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Analyses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_analysis_user")
                            .from(Analyses::Table, Analyses::IdUser)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_analysis_sample")
                            .from(Analyses::Table, Analyses::SampleNumber)
                            .to(Samples::Table, Samples::SampleNumber)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_analysis_client")
                            .from(Analyses::Table, Analyses::ClientCode)
                            .to(Clients::Table, Clients::ClientCode)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create results table
        manager
            .create_table(
                Table::create()
                    .table(Results::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Results::ResultNumber)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Results::AnalysisNumber).integer().not_null())
                    .col(ColumnDef::new(Results::SampleNumber).integer().not_null())
                    .col(ColumnDef::new(Results::IdUser).integer().not_null())
                    .col(ColumnDef::new(Results::ClientCode).string().not_null())
                    .col(
                        ColumnDef::new(Results::ResultDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Results::Result).text().not_null())
                    .col(
                        ColumnDef::new(Results::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Results::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_result_analysis")
                            .from(Results::Table, Results::AnalysisNumber)
                            .to(Analyses::Table, Analyses::AnalysisNumber)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_result_sample")
                            .from(Results::Table, Results::SampleNumber)
                            .to(Samples::Table, Samples::SampleNumber)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_result_user")
                            .from(Results::Table, Results::IdUser)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_result_client")
                            .from(Results::Table, Results::ClientCode)
                            .to(Clients::Table, Clients::ClientCode)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create trials table
        manager
            .create_table(
                Table::create()
                    .table(Trials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trials::TrialNumber)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Trials::AnalysisNumber).integer().not_null())
                    .col(ColumnDef::new(Trials::SampleNumber).integer().not_null())
                    .col(ColumnDef::new(Trials::ResultNumber).integer().not_null())
                    .col(ColumnDef::new(Trials::IdRole).integer().not_null())
                    .col(ColumnDef::new(Trials::IdUser).integer().not_null())
                    .col(ColumnDef::new(Trials::ClientCode).string().not_null())
                    .col(
                        ColumnDef::new(Trials::EmissionDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Trials::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Trials::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trial_analysis")
                            .from(Trials::Table, Trials::AnalysisNumber)
                            .to(Analyses::Table, Analyses::AnalysisNumber)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trial_sample")
                            .from(Trials::Table, Trials::SampleNumber)
                            .to(Samples::Table, Samples::SampleNumber)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trial_result")
                            .from(Trials::Table, Trials::ResultNumber)
                            .to(Results::Table, Results::ResultNumber)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trial_user")
                            .from(Trials::Table, Trials::IdUser)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trial_client")
                            .from(Trials::Table, Trials::ClientCode)
                            .to(Clients::Table, Clients::ClientCode)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Named counters (client codes)
        manager
            .create_table(
                Table::create()
                    .table(Sequences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sequences::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Sequences::Value)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup indexes for reference checks
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_samples_client")
                    .table(Samples::Table)
                    .col(Samples::ClientCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_analyses_sample")
                    .table(Analyses::Table)
                    .col(Analyses::SampleNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_results_analysis")
                    .table(Results::Table)
                    .col(Results::AnalysisNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_trials_result")
                    .table(Trials::Table)
                    .col(Trials::ResultNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sequences::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Trials::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Results::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Analyses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Samples::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Username,
    PasswordHash,
    Roles,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    ClientCode,
    Name,
    Contact,
    PhoneNumber,
    Email,
    Address,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Samples {
    Table,
    SampleNumber,
    ClientCode,
    EntryDate,
    Description,
    SamplingDate,
    Observations,
    AnalysisQuantity,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Analyses {
    Table,
    AnalysisNumber,
    IdUser,
    SampleNumber,
    ClientCode,
    SowDate,
    TypeAnalysis,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Results {
    Table,
    ResultNumber,
    AnalysisNumber,
    SampleNumber,
    IdUser,
    ClientCode,
    ResultDate,
    Result,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Trials {
    Table,
    TrialNumber,
    AnalysisNumber,
    SampleNumber,
    ResultNumber,
    IdRole,
    IdUser,
    ClientCode,
    EmissionDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Sequences {
    Table,
    Name,
    Value,
}
