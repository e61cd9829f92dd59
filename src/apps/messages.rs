/// Post-install and info text for each app
use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::Serialize;

pub const SUPPORT_MESSAGE_SHORT: &str =
    "Thanks for using arkade! Star the project and report issues on GitHub.";

const MONGODB_INSTALLED_BANNER: &str = "\
=======================================================================
=                  MongoDB has been installed.                        =
=======================================================================";

const MONGODB_INFO_TEMPLATE: &str = r#"
# MongoDB can be accessed via port 27017 on the following DNS name from within your cluster:

mongodb.{{namespace}}.svc.cluster.local

# To get the root password run:

export MONGODB_ROOT_PASSWORD=$(kubectl get secret --namespace {{namespace}} mongodb -o jsonpath="{.data.mongodb-root-password}" | base64 --decode)

# To connect to your database run the following command:

kubectl run --namespace {{namespace}} mongodb-client --rm --tty -i --restart='Never' --image bitnami/mongodb --command -- mongo admin --host mongodb --authenticationDatabase admin -u root -p $MONGODB_ROOT_PASSWORD

# To connect to your database from outside the cluster execute the following commands:

kubectl port-forward --namespace {{namespace}} svc/mongodb 27017:27017 &
mongo --host 127.0.0.1 --authenticationDatabase admin -p $MONGODB_ROOT_PASSWORD

# More on GitHub : https://github.com/bitnami/charts/tree/main/bitnami/mongodb"#;

const REGISTRY_INSTALLED_BANNER: &str = "\
=======================================================================
= docker-registry has been installed.                                 =
=======================================================================";

pub const REGISTRY_INFO: &str = r#"# Your docker-registry has been configured

kubectl logs deploy/docker-registry

export IP="192.168.0.11" # Set to WiFI/ethernet adapter
export PASSWORD="" # See below
kubectl port-forward svc/docker-registry --address 0.0.0.0 5000 &

docker login $IP:5000 --username admin --password $PASSWORD
docker tag alpine:3.11 $IP:5000/alpine:3.11
docker push $IP:5000/alpine:3.11

# This chart is community maintained.
# Find out more at:
# https://github.com/twuni/docker-registry.helm
# https://github.com/distribution/distribution"#;

#[derive(Serialize)]
struct InfoContext<'a> {
    namespace: &'a str,
}

/// MongoDB connection instructions for the given namespace
pub fn mongodb_info(namespace: &str) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .render_template(MONGODB_INFO_TEMPLATE, &InfoContext { namespace })
        .context("Failed to render MongoDB info")
}

pub fn mongodb_post_install() -> String {
    format!("{}\n\n{}", MONGODB_INSTALLED_BANNER, SUPPORT_MESSAGE_SHORT)
}

pub fn registry_post_install() -> String {
    format!(
        "{}\n\n{}\n\n{}",
        REGISTRY_INSTALLED_BANNER, REGISTRY_INFO, SUPPORT_MESSAGE_SHORT
    )
}
